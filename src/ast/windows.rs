//! Window specifications for windowed aggregations.

use serde::{Deserialize, Serialize};

/// Time unit for window durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Milliseconds => write!(f, "MILLISECONDS"),
            TimeUnit::Seconds => write!(f, "SECONDS"),
            TimeUnit::Minutes => write!(f, "MINUTES"),
            TimeUnit::Hours => write!(f, "HOURS"),
            TimeUnit::Days => write!(f, "DAYS"),
        }
    }
}

/// A window duration, rendered as `<value> <UNIT>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub value: u32,
    pub unit: TimeUnit,
}

impl Duration {
    pub fn of_milliseconds(value: u32) -> Self {
        Self {
            value,
            unit: TimeUnit::Milliseconds,
        }
    }

    pub fn of_seconds(value: u32) -> Self {
        Self {
            value,
            unit: TimeUnit::Seconds,
        }
    }

    pub fn of_minutes(value: u32) -> Self {
        Self {
            value,
            unit: TimeUnit::Minutes,
        }
    }

    pub fn of_hours(value: u32) -> Self {
        Self {
            value,
            unit: TimeUnit::Hours,
        }
    }

    pub fn of_days(value: u32) -> Self {
        Self {
            value,
            unit: TimeUnit::Days,
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Output refinement of a windowed push query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputRefinement {
    #[default]
    Changes,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowType {
    Tumbling,
    Hopping,
    Session,
}

/// A window specification: type, size, and optional bounds tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindows {
    pub window_type: WindowType,
    pub duration: Duration,
    #[serde(default)]
    pub advance_by: Option<Duration>,
    #[serde(default)]
    pub retention: Option<Duration>,
    #[serde(default)]
    pub grace_period: Option<Duration>,
    #[serde(default)]
    pub output_refinement: OutputRefinement,
}

impl TimeWindows {
    pub fn tumbling(size: Duration) -> Self {
        Self {
            window_type: WindowType::Tumbling,
            duration: size,
            advance_by: None,
            retention: None,
            grace_period: None,
            output_refinement: OutputRefinement::Changes,
        }
    }

    pub fn hopping(size: Duration, advance_by: Duration) -> Self {
        Self {
            advance_by: Some(advance_by),
            ..Self::tumbling(size)
        }
        .window_type(WindowType::Hopping)
    }

    pub fn session(gap: Duration) -> Self {
        Self::tumbling(gap).window_type(WindowType::Session)
    }

    fn window_type(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self
    }

    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = Some(retention);
        self
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = Some(grace_period);
        self
    }

    /// Emit only the final result per window (EMIT FINAL).
    pub fn final_output(mut self) -> Self {
        self.output_refinement = OutputRefinement::Final;
        self
    }
}
