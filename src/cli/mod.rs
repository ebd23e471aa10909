//! Command-line mode: argument parsing, option merging and output routing.

mod args;
mod context;
mod error;
mod output;
pub mod prompts;
pub mod quiet;

pub use args::Args;
pub use context::Context;
pub use error::CliError;
pub use output::copy_to_clipboard;

/// Set up `env_logger` on stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
