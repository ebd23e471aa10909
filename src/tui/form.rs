//! Interactive option form.

use copypasta::ClipboardContext;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use crossterm::style::{Stylize, style};
use passgen::entropy::Entropy;
use passgen::pass::{self, CharacterClass, Password, charset};
use passgen::settings::{self, Settings};
use passgen::strength;

use crate::cli::copy_to_clipboard;
use crate::terminal::{
    RawModeGuard, box_bottom, box_line, box_rule, box_top, checkbox, clear, flush, strength_bar,
};

const PLACEHOLDER: &str = "Press Enter to generate";

/// Status line under the password.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    None,
    Info(String),
    Warning(String),
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Redraw,
    Quit,
}

pub struct Form {
    settings: Settings,
    password: Option<Password>,
    notice: Notice,
    rng: Entropy,
    clipboard: Option<ClipboardContext>,
}

impl Form {
    pub fn new(settings: Settings, rng: Entropy) -> Self {
        Self {
            settings,
            password: None,
            notice: Notice::None,
            rng,
            clipboard: None,
        }
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> std::io::Result<()> {
        let _guard = RawModeGuard::new()?;

        loop {
            self.draw();
            let Event::Key(key) = read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if self.handle_key(key) == Action::Quit {
                break;
            }
        }

        clear();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            KeyCode::Left | KeyCode::Char('-') => self.adjust_length(-1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_length(1),
            KeyCode::Down => self.adjust_length(-4),
            KeyCode::Up => self.adjust_length(4),
            KeyCode::Char('u') => self.toggle(CharacterClass::Upper),
            KeyCode::Char('l') => self.toggle(CharacterClass::Lower),
            KeyCode::Char('d') => self.toggle(CharacterClass::Digit),
            KeyCode::Char('s') => self.toggle(CharacterClass::Symbol),
            KeyCode::Char('a') => {
                self.settings.exclude_ambiguous = !self.settings.exclude_ambiguous;
            }
            KeyCode::Enter | KeyCode::Char('g') => self.generate(),
            KeyCode::Char('c') => self.copy(),
            KeyCode::Char('w') => self.save(),
            _ => {}
        }
        Action::Redraw
    }

    fn adjust_length(&mut self, delta: isize) {
        let length = self.settings.length.saturating_add_signed(delta);
        self.settings.length = length.clamp(
            Settings::MIN_INTERACTIVE_LENGTH,
            Settings::MAX_INTERACTIVE_LENGTH,
        );
    }

    fn toggle(&mut self, class: CharacterClass) {
        self.settings.classes.toggle(class);
    }

    fn generate(&mut self) {
        if self.settings.classes.is_empty() {
            self.password = None;
            self.notice = Notice::Warning("Select at least one option!".into());
            return;
        }

        match pass::generate_with(&self.settings.request(), &mut self.rng) {
            Ok(password) => {
                self.password = Some(password);
                self.notice = Notice::None;
            }
            Err(e) => {
                self.password = None;
                self.notice = Notice::Warning(e.to_string());
            }
        }
    }

    fn copy(&mut self) {
        let Some(password) = self.password.as_ref() else {
            self.notice = Notice::Warning("Nothing to copy yet".into());
            return;
        };

        if self.clipboard.is_none() {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => {
                    log::info!("clipboard unavailable: {e}");
                    self.notice = Notice::Warning("Clipboard unavailable".into());
                    return;
                }
            }
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            self.notice = match copy_to_clipboard(ctx, &[password.as_str()]) {
                Ok(()) => Notice::Info("Copied to clipboard!".into()),
                Err(e) => Notice::Warning(format!("Failed to copy: {e}")),
            };
        }
    }

    fn save(&mut self) {
        self.notice = match self.settings.save_to_file() {
            Ok(()) => Notice::Info(format!(
                "Defaults saved to {}",
                settings::default_path().display()
            )),
            Err(e) => Notice::Warning(e.to_string()),
        };
    }

    fn draw(&self) {
        clear();
        let s = &self.settings;

        box_top("passgen");
        box_line(&format!("Length: {:<3} [\u{2190}/\u{2192}]", s.length));
        for pair in CharacterClass::ALL.chunks(2) {
            let cells: Vec<String> = pair
                .iter()
                .map(|&class| {
                    let checked = s.classes.contains(class);
                    format!("{:<20}", checkbox(checked, class.label(), class_key(class)))
                })
                .collect();
            box_line(cells.concat().trim_end());
        }
        box_line(&checkbox(s.exclude_ambiguous, "Exclude ambiguous I l 1 O 0", 'a'));
        box_rule();

        match &self.password {
            Some(password) => box_line(password.as_str()),
            None => box_line(PLACEHOLDER),
        }

        let score = self.password.as_deref().map(strength::score).unwrap_or(0);
        box_line(&format!("Strength: {}", strength_bar(score, 20)));

        let size = charset::size(s.classes, s.exclude_ambiguous);
        let bits = strength::entropy_bits(s.length, size);
        box_line(&format!(
            "Entropy:  {:.1} bits ({}) \u{2022} {} chars \u{2022} {}",
            bits,
            strength::entropy_label(bits),
            size,
            self.rng.source()
        ));

        match &self.notice {
            Notice::None => box_line(""),
            Notice::Info(msg) => box_line(msg),
            Notice::Warning(msg) => box_line(&style(msg).yellow().to_string()),
        }
        box_bottom();
        print!(" [Enter] generate  [c] copy  [w] save defaults  [q] quit\r\n");
        flush();
    }
}

/// Toggle key shown next to each class checkbox.
fn class_key(class: CharacterClass) -> char {
    match class {
        CharacterClass::Upper => 'u',
        CharacterClass::Lower => 'l',
        CharacterClass::Digit => 'd',
        CharacterClass::Symbol => 's',
    }
}
