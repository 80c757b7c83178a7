//! Window clause rendering and the reserved window-bound tokens.

use crate::ast::{TimeWindows, WindowBound, WindowType};

/// Fixed uppercase token for a window-bound marker.
pub(crate) fn bound_token(bound: WindowBound) -> &'static str {
    match bound {
        WindowBound::Start => "WINDOWSTART",
        WindowBound::End => "WINDOWEND",
    }
}

/// Append the windowed-aggregation clause, e.g.
/// ` WINDOW TUMBLING (SIZE 5 MINUTES, GRACE PERIOD 1 HOURS)`.
pub(crate) fn append_window_clause(buffer: &mut String, windows: &TimeWindows) {
    buffer.push_str(" WINDOW ");

    match windows.window_type {
        WindowType::Session => {
            buffer.push_str(&format!("SESSION ({})", windows.duration));
        }
        WindowType::Tumbling => {
            buffer.push_str(&format!("TUMBLING (SIZE {}", windows.duration));
            append_bounds_tuning(buffer, windows);
            buffer.push(')');
        }
        WindowType::Hopping => {
            let advance_by = windows.advance_by.unwrap_or(windows.duration);
            buffer.push_str(&format!(
                "HOPPING (SIZE {}, ADVANCE BY {advance_by}",
                windows.duration
            ));
            append_bounds_tuning(buffer, windows);
            buffer.push(')');
        }
    }
}

fn append_bounds_tuning(buffer: &mut String, windows: &TimeWindows) {
    if let Some(retention) = windows.retention {
        buffer.push_str(&format!(", RETENTION {retention}"));
    }

    if let Some(grace_period) = windows.grace_period {
        buffer.push_str(&format!(", GRACE PERIOD {grace_period}"));
    }
}
