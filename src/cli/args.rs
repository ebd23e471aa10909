use std::path::PathBuf;

use clap::Parser;
use passgen::entropy::Source;
use passgen::pass::CharacterClass;

/// Generate passwords from upper, lower, digit and symbol classes.
///
/// Run without arguments in a terminal to open the interactive form.
#[derive(Parser, Debug)]
#[command(name = "passgen", version, about)]
pub struct Args {
    /// Password length (defaults to the saved setting, 16 out of the box)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Include uppercase letters A-Z
    #[arg(long, overrides_with = "no_upper")]
    pub upper: bool,
    #[arg(long, overrides_with = "upper")]
    pub no_upper: bool,

    /// Include lowercase letters a-z
    #[arg(long, overrides_with = "no_lower")]
    pub lower: bool,
    #[arg(long, overrides_with = "lower")]
    pub no_lower: bool,

    /// Include digits 0-9
    #[arg(long, overrides_with = "no_digits")]
    pub digits: bool,
    #[arg(long, overrides_with = "digits")]
    pub no_digits: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Leave out I, l, 1, O and 0
    #[arg(short = 'a', long, overrides_with = "allow_ambiguous")]
    pub exclude_ambiguous: bool,
    #[arg(long, overrides_with = "exclude_ambiguous")]
    pub allow_ambiguous: bool,

    /// Print a strength rating next to each password
    #[arg(short, long)]
    pub strength: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Append passwords to a file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Random source: os or chacha
    #[arg(long, default_value_t = Source::Os, env = "PASSGEN_SOURCE")]
    pub source: Source,

    /// Save the given options as new defaults
    #[arg(long)]
    pub save: bool,

    /// Open the interactive form
    #[arg(short, long, conflicts_with_all = ["clipboard", "output", "number"])]
    pub interactive: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Explicit on/off for a class, `None` when neither flag was given.
    pub fn class_flag(&self, class: CharacterClass) -> Option<bool> {
        let (on, off) = match class {
            CharacterClass::Upper => (self.upper, self.no_upper),
            CharacterClass::Lower => (self.lower, self.no_lower),
            CharacterClass::Digit => (self.digits, self.no_digits),
            CharacterClass::Symbol => (self.symbols, self.no_symbols),
        };
        toggle(on, off)
    }

    pub fn ambiguous_flag(&self) -> Option<bool> {
        toggle(self.exclude_ambiguous, self.allow_ambiguous)
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("passgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn later_toggle_wins() {
        let args = parse(&["--no-upper", "--upper", "--symbols", "--no-symbols"]);
        assert_eq!(args.class_flag(CharacterClass::Upper), Some(true));
        assert_eq!(args.class_flag(CharacterClass::Symbol), Some(false));
        assert_eq!(args.class_flag(CharacterClass::Lower), None);
    }

    #[test]
    fn short_flags() {
        let args = parse(&["-l", "12", "-n", "3", "-a", "-s", "-b", "-vv"]);
        assert_eq!(args.length, Some(12));
        assert_eq!(args.number, 3);
        assert_eq!(args.ambiguous_flag(), Some(true));
        assert!(args.strength);
        assert!(args.clipboard);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn source_is_parsed() {
        assert_eq!(parse(&["--source", "chacha"]).source, Source::ChaCha);
        assert_eq!(parse(&[]).source, Source::Os);
    }
}
