use chrono::{DateTime, Utc};

/// Formats `now` truncated to the hour, e.g. `2023-10-25T21:00`.
pub fn current_hour_iso(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:00").to_string()
}

/// Picks the forecast entry for `target`.
///
/// An exact match wins. Otherwise the closest earlier hour is used, relying on
/// ISO-8601 hour strings sorting the same way lexicographically and
/// chronologically. Returns `None` when every entry is after `target`.
pub fn resolve_current_hour_index(times: &[String], target: &str) -> Option<usize> {
    if let Some(index) = times.iter().position(|t| t == target) {
        return Some(index);
    }

    let mut closest = None;
    for (index, time) in times.iter().enumerate() {
        if time.as_str() > target {
            break;
        }
        closest = Some(index);
    }

    closest
}
