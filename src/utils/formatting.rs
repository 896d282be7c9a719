//! Formatting utilities used for CLI outputs.

use chrono::Duration;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Duration as "08h 25m" (minutes truncated).
pub fn duration_readable(d: Duration) -> String {
    let mins = d.num_minutes().max(0);
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// Human label of a role code, as shown by `whoami`.
pub fn describe_role(code: &str) -> &'static str {
    match code {
        "employee" => "Employee",
        "hr" => "HR",
        "admin" => "Administrator",
        _ => "Unknown",
    }
}
