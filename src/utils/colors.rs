/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";

/// Badge colour of a status label:
/// Active → green, On Lunch → yellow, Logged Out → red, anything else → grey.
pub fn color_for_status(label: &str) -> &'static str {
    match label {
        "Active" => GREEN,
        "On Lunch" => YELLOW,
        "Logged Out" => RED,
        _ => GREY,
    }
}

pub fn colorize_status(label: &str) -> String {
    format!("{}{}{}", color_for_status(label), label, RESET)
}
