//! Warning, error and confirmation messages for CLI output.

use std::io::Write;
use std::path::Path;

use crossterm::style::{Stylize, style};

use super::quiet;

/// Warning on stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", style(msg).yellow());
    }
}

/// Error on stderr (red), always shown.
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).red());
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        let noun = if count == 1 { "password" } else { "passwords" };
        println!("*** {count} {noun} copied to clipboard ***");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &Path) {
    if !quiet::enabled() {
        let full_path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        println!("{count} password(s) \u{2192} {}", full_path.display());
    }
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        println!("Defaults saved to {}", path.display());
    }
}
