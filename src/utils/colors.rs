/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Retention color:
/// \>= 50% → green
/// \>= 20% → yellow
/// below → red
pub fn color_for_percentage(value: f64) -> &'static str {
    if value >= 50.0 {
        GREEN
    } else if value >= 20.0 {
        YELLOW
    } else {
        RED
    }
}
