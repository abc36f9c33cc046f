//! Formatting utilities used for CLI outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Terminal column width of `s`, ignoring ANSI escape sequences.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Pad on the right up to `width` terminal columns (CJK aware).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}
