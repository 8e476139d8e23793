//! Time and timestamp utilities

use chrono::Utc;

/// Round a time value in seconds to one decimal
///
/// Subtitle start times and durations are always stored in this form so
/// ordering and display stay stable.
pub fn round_time(time: f64) -> f64 {
    (10.0 * time).round() / 10.0
}

/// Current Unix time in milliseconds
pub fn current_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a start time as `<minutes>m <seconds>s`
pub fn format_start(time: f64) -> String {
    let time = round_time(time);
    let minutes = (time / 60.0).floor();
    let seconds = round_time(time - minutes * 60.0);
    format!("{}m {}s", minutes as i64, seconds)
}

/// Build an id from a millisecond timestamp, bumping it until `taken` rejects it
pub fn unique_millis_id<F>(prefix: &str, now: i64, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut stamp = now;
    loop {
        let id = format!("{}{}", prefix, stamp);
        if !taken(&id) {
            return id;
        }
        stamp += 1;
    }
}
