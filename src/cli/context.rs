//! CLI context - merges saved settings with flags and drives one run.

use copypasta::ClipboardContext;
use passgen::entropy::Entropy;
use passgen::pass::{self, CharacterClass, Password};
use passgen::settings::{self, Settings};

use super::{Args, CliError, output, prompts, quiet};

pub struct Context {
    settings: Settings,
    args: Args,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Load saved defaults and layer the command-line flags on top.
    pub fn new(args: Args) -> Self {
        quiet::set(args.quiet);

        let saved = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });

        let mut ctx = Self {
            settings: saved,
            args,
            clipboard: None,
        };
        ctx.apply_flags();
        ctx
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        self.handle_save()?;
        self.handle_clipboard();
        self.generate_output()
    }

    /// Open the interactive form seeded with the merged settings.
    pub fn run_interactive(self) -> Result<(), CliError> {
        self.handle_save()?;
        crate::tui::run(self.settings, self.args.source)
    }

    fn apply_flags(&mut self) {
        if let Some(length) = self.args.length {
            self.settings.length = length;
        }
        for class in CharacterClass::ALL {
            if let Some(enabled) = self.args.class_flag(class) {
                self.settings.classes.set(class, enabled);
            }
        }
        if let Some(exclude) = self.args.ambiguous_flag() {
            self.settings.exclude_ambiguous = exclude;
        }
        if self.args.strength {
            self.settings.show_strength = true;
        }
    }

    fn handle_save(&self) -> Result<(), CliError> {
        if self.args.save {
            self.settings.save_to_file()?;
            prompts::settings_saved(&settings::default_path());
        }
        Ok(())
    }

    fn handle_clipboard(&mut self) {
        if !self.args.clipboard {
            return;
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(e) => {
                log::info!("clipboard unavailable: {e}");
                if !prompts::clipboard_fallback_prompt() {
                    self.args.number = 0;
                }
            }
        }
    }

    /// Generate passwords and route them to clipboard, file or stdout.
    pub fn generate_output(&mut self) -> Result<(), CliError> {
        let request = self.settings.request();
        let count = self.args.number;
        let mut rng = Entropy::new(self.args.source)?;

        log::info!(
            "generating {count} password(s): length={} classes={} exclude_ambiguous={} source={}",
            request.length,
            request.classes,
            request.exclude_ambiguous,
            rng.source()
        );

        let passwords = pass::generate_batch(&request, count, &mut rng)?;
        if count == 0 {
            return Ok(());
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            // Clipboard gets one joined string.
            let passwords: Vec<Password> = passwords.collect();
            let texts: Vec<&str> = passwords.iter().map(|p| p.as_str()).collect();
            match output::copy_to_clipboard(ctx, &texts) {
                Ok(()) => prompts::clipboard_copied(passwords.len()),
                Err(e) => prompts::clipboard_error(&e),
            }
        } else if let Some(path) = &self.args.output {
            let written = output::to_file(path, passwords)?;
            prompts::passwords_written(written, path);
        } else {
            output::to_stdout(passwords, self.settings.show_strength, quiet::stdout_is_tty())?;
        }

        Ok(())
    }
}
