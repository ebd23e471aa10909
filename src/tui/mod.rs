//! Interactive terminal mode.

mod form;

use passgen::entropy::{Entropy, Source};
use passgen::settings::Settings;

use crate::cli::CliError;
use crate::terminal::reset_terminal;
use form::Form;

/// Run the interactive form starting from `settings` (saved defaults with
/// any command-line flags already applied).
pub fn run(settings: Settings, source: Source) -> Result<(), CliError> {
    reset_terminal();
    let rng = Entropy::new(source)?;

    Form::new(settings, rng).run()?;
    reset_terminal();
    Ok(())
}
