//! Terminal output primitives.
//!
//! Plain ANSI, soft palette. Kept small on purpose: the CLI is a thin
//! window onto the engine, not a UI framework.

/// ANSI color codes - pastel palette
pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BLUE: &'static str = "\x1b[38;5;117m";
    pub const GREEN: &'static str = "\x1b[38;5;120m";
    pub const YELLOW: &'static str = "\x1b[38;5;228m";
    pub const RED: &'static str = "\x1b[38;5;210m";
    pub const GRAY: &'static str = "\x1b[38;5;250m";
    pub const CYAN: &'static str = "\x1b[38;5;159m";
    pub const BOLD: &'static str = "\x1b[1m";
}

/// Status level for messages
#[derive(Debug, Clone, Copy)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn symbol(&self) -> &'static str {
        match self {
            Level::Info => "i",
            Level::Success => "+",
            Level::Warning => "!",
            Level::Error => "x",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Level::Info => Colors::CYAN,
            Level::Success => Colors::GREEN,
            Level::Warning => Colors::YELLOW,
            Level::Error => Colors::RED,
        }
    }
}

/// Format a header line
pub fn header(text: &str) -> String {
    format!(
        "{}{}== {} =={}",
        Colors::BOLD,
        Colors::BLUE,
        text,
        Colors::RESET
    )
}

/// Format a section title
pub fn section(text: &str) -> String {
    format!(
        "{}{}-> {}{}",
        Colors::BOLD,
        Colors::CYAN,
        text,
        Colors::RESET
    )
}

/// Format a status message
pub fn status(level: Level, message: &str) -> String {
    format!(
        "{}[{}] {}{}",
        level.color(),
        level.symbol(),
        message,
        Colors::RESET
    )
}

/// Format a key-value pair
pub fn kv(key: &str, value: &str) -> String {
    format!("{}{}:{} {}", Colors::GRAY, key, Colors::RESET, value)
}

/// Small inline badge, e.g. "Level 2" or "Streak 4".
pub fn chip(text: &str) -> String {
    format!("{}[{}]{}", Colors::GRAY, text, Colors::RESET)
}

/// Textual progress gauge, e.g. "#####............. 5/20".
pub fn gauge(done: u32, target: u32) -> String {
    let width = 20usize;
    let target = target.max(1);
    let filled = ((done.min(target) as usize) * width) / target as usize;
    format!(
        "{}{}{}{} {}/{}",
        Colors::GREEN,
        "#".repeat(filled),
        ".".repeat(width - filled),
        Colors::RESET,
        done,
        target
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_bounds() {
        assert!(gauge(0, 20).contains("0/20"));
        assert!(gauge(20, 20).contains("#".repeat(20).as_str()));
        // Overshoot clamps instead of panicking.
        assert!(gauge(25, 20).contains("25/20"));
        // Zero target does not divide by zero.
        let g = gauge(0, 0);
        assert!(g.contains("0/1"));
    }

    #[test]
    fn test_status_carries_symbol() {
        assert!(status(Level::Success, "saved").contains("[+] saved"));
        assert!(status(Level::Error, "nope").contains("[x] nope"));
    }
}
