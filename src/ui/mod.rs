pub mod widgets;

use chrono::{DateTime, Local};

/// Format a timestamp the way the dashboard shows "last updated":
/// day/month/year with 2-digit hour and minute, Spanish convention.
pub fn format_timestamp(t: DateTime<Local>) -> String {
    t.format("%d/%m/%Y, %H:%M").to_string()
}
