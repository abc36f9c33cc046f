/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Green for an enabled control, grey for a disabled one.
pub fn color_for_enabled(enabled: bool) -> &'static str {
    if enabled { GREEN } else { GREY }
}

pub fn colorize_phase(active: bool, text: &str) -> String {
    if active {
        format!("{YELLOW}{text}{RESET}")
    } else {
        format!("{BLUE}{text}{RESET}")
    }
}

/// Grey for the empty-list placeholder.
pub fn colorize_placeholder(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
