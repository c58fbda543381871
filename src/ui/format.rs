//! Display formatting for sessions and sets.

use chrono::{DateTime, Utc};

/// Format a session's length as hours and minutes.
///
/// An open session measures against the current time. Sub-minute sessions
/// render as "0m".
pub fn format_session_duration(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> String {
    let end = end.unwrap_or_else(Utc::now);
    let total_minutes = end.signed_duration_since(start).num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format one set as "{reps} reps × {weight} lbs", weight to one decimal.
pub fn format_set_line(reps: i32, weight: f64) -> String {
    format!("{} reps × {:.1} lbs", reps, weight)
}

/// Format a timestamp relative to now ("just now", "2 hours ago").
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let seconds = now.signed_duration_since(timestamp).num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{} minutes ago", minutes)
        };
    }

    let hours = minutes / 60;
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }

    let days = hours / 24;
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}
