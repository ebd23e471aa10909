//! Terminal output utilities.
//!
//! Box drawing, checkboxes and the colored strength bar. Every line ends in
//! `\r\n` so output renders the same in raw and cooked mode.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize, style};
use crossterm::terminal::disable_raw_mode;
use passgen::strength::{MAX_SCORE, Strength};

/// Wide enough for the longest password the form allows.
pub const BOX_WIDTH: usize = 72;

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset colors.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

/// ┌─ Title ───────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH.saturating_sub(2 + title_part.chars().count());
        print!("┌{}{}┐\r\n", title_part, "─".repeat(remaining));
    }
}

/// │ content               │
pub fn box_line(content: &str) {
    print!("{}\r\n", boxed(content));
}

fn boxed(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// ├───────────────────────┤
pub fn box_rule() {
    print!("├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// └───────────────────────┘
pub fn box_bottom() {
    print!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Widgets
// ============================================================================

pub fn checkbox(checked: bool, label: &str, key: char) -> String {
    let mark = if checked { 'x' } else { ' ' };
    format!("[{mark}] {label} ({key})")
}

fn strength_color(strength: Strength) -> Color {
    match strength {
        Strength::Weak => Color::Red,
        Strength::Medium => Color::Yellow,
        Strength::Strong => Color::Green,
    }
}

/// Strength label, colored when writing to a terminal.
pub fn strength_tag(strength: Strength, colored: bool) -> String {
    if colored {
        style(strength.label()).with(strength_color(strength)).to_string()
    } else {
        strength.label().to_string()
    }
}

/// Filled bar proportional to `score`, colored by rating.
pub fn strength_bar(score: u8, width: usize) -> String {
    let strength = Strength::from_score(score);
    let filled = width * score.min(MAX_SCORE) as usize / MAX_SCORE as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    format!(
        "{} {}",
        style(bar).with(strength_color(strength)),
        strength_tag(strength, true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgen::settings::Settings;

    #[test]
    fn width_ignores_escape_codes() {
        assert_eq!(console_width("\x1b[31mWeak\x1b[0m"), 4);
        assert_eq!(console_width("plain"), 5);
    }

    #[test]
    fn longest_form_password_fits_the_box() {
        let password = "x".repeat(Settings::MAX_INTERACTIVE_LENGTH);
        assert_eq!(console_width(&boxed(&password)), BOX_WIDTH);
        let warning = style("Select at least one option!").yellow().to_string();
        assert_eq!(console_width(&boxed(&warning)), BOX_WIDTH);
    }

    #[test]
    fn checkbox_marks_state() {
        assert_eq!(checkbox(true, "Symbols", 's'), "[x] Symbols (s)");
        assert_eq!(checkbox(false, "Symbols", 's'), "[ ] Symbols (s)");
    }

    #[test]
    fn bar_fills_by_score() {
        let bar = strength_bar(MAX_SCORE, 10);
        assert_eq!(console_width(&bar), 10 + 1 + "Strong".len());
        assert_eq!(bar.matches('█').count(), 10);
        assert_eq!(strength_bar(0, 10).matches('█').count(), 0);
    }

    #[test]
    fn plain_tag_has_no_escapes() {
        assert_eq!(strength_tag(Strength::Medium, false), "Medium");
    }
}
