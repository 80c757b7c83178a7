//! Window clause and window-bounds tests.

use super::fixtures::{IoTSensorStats, Location};
use crate::ast::builders::{call, col, lit, window_end, window_start};
use crate::ast::{Duration, StreamQuery, TimeWindows};

#[test]
fn test_tumbling_window() {
    let ksql = StreamQuery::<Location>::new()
        .select([col("Latitude"), call("COUNT", [col("Latitude")])])
        .windowed_by(TimeWindows::tumbling(Duration::of_seconds(2)))
        .group_by([col("Latitude")])
        .to_query_string()
        .unwrap();

    assert_eq!(
        ksql,
        "SELECT Latitude, COUNT(Latitude) FROM Locations WINDOW TUMBLING (SIZE 2 SECONDS) GROUP BY Latitude EMIT CHANGES;"
    );
}

#[test]
fn test_tumbling_window_with_retention_and_grace_period() {
    let windows = TimeWindows::tumbling(Duration::of_seconds(2))
        .with_retention(Duration::of_days(2))
        .with_grace_period(Duration::of_hours(2));

    let ksql = StreamQuery::<Location>::new()
        .windowed_by(windows)
        .group_by([col("Latitude")])
        .to_query_string()
        .unwrap();

    assert_eq!(
        ksql,
        "SELECT * FROM Locations WINDOW TUMBLING (SIZE 2 SECONDS, RETENTION 2 DAYS, GRACE PERIOD 2 HOURS) GROUP BY Latitude EMIT CHANGES;"
    );
}

#[test]
fn test_hopping_window() {
    let windows = TimeWindows::hopping(Duration::of_minutes(5), Duration::of_seconds(10));

    let ksql = StreamQuery::<Location>::new()
        .windowed_by(windows)
        .group_by([col("Latitude")])
        .to_query_string()
        .unwrap();

    assert_eq!(
        ksql,
        "SELECT * FROM Locations WINDOW HOPPING (SIZE 5 MINUTES, ADVANCE BY 10 SECONDS) GROUP BY Latitude EMIT CHANGES;"
    );
}

#[test]
fn test_session_window() {
    let ksql = StreamQuery::<Location>::new()
        .windowed_by(TimeWindows::session(Duration::of_seconds(5)))
        .group_by([col("Latitude")])
        .to_query_string()
        .unwrap();

    assert_eq!(
        ksql,
        "SELECT * FROM Locations WINDOW SESSION (5 SECONDS) GROUP BY Latitude EMIT CHANGES;"
    );
}

#[test]
fn test_final_output_refinement_emits_final() {
    let windows = TimeWindows::tumbling(Duration::of_minutes(1)).final_output();

    let ksql = StreamQuery::<Location>::new()
        .windowed_by(windows)
        .group_by([col("Latitude")])
        .to_query_string()
        .unwrap();

    assert_eq!(
        ksql,
        "SELECT * FROM Locations WINDOW TUMBLING (SIZE 1 MINUTES) GROUP BY Latitude EMIT FINAL;"
    );
}

#[test]
fn test_window_bounds_with_numeric_limits() {
    let window_start_at = 1575044700000i64;
    let window_end_at = 1675044700000i64;

    let ksql = StreamQuery::<IoTSensorStats>::new()
        .where_(col("SensorId").eq(lit("sensor-1")))
        .where_(
            window_start()
                .gt(lit(window_start_at))
                .and(window_end().le(lit(window_end_at))),
        )
        .to_pull_query_string()
        .unwrap();

    assert_eq!(
        ksql,
        "SELECT * FROM IoTSensorStats\nWHERE SensorId = 'sensor-1' AND (WINDOWSTART > 1575044700000) AND (WINDOWEND <= 1675044700000);"
    );
}

#[test]
fn test_window_bounds_with_string_limits() {
    let ksql = StreamQuery::<IoTSensorStats>::new()
        .where_(
            window_start()
                .gt(lit("2019-10-03T21:31:16"))
                .and(window_end().le(lit("2020-10-03T21:31:16"))),
        )
        .to_pull_query_string()
        .unwrap();

    assert_eq!(
        ksql,
        "SELECT * FROM IoTSensorStats\nWHERE (WINDOWSTART > '2019-10-03T21:31:16') AND (WINDOWEND <= '2020-10-03T21:31:16');"
    );
}
