use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod terminal;
mod tui;

use cli::{Args, CliError, Context, prompts, quiet};

fn main() -> ExitCode {
    exits::install_handlers();

    let bare = std::env::args_os().len() == 1;
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let interactive =
        args.interactive || (bare && quiet::stdin_is_tty() && quiet::stdout_is_tty());
    let mut context = Context::new(args);
    let result = if interactive {
        context.run_interactive()
    } else {
        context.run()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn report(err: CliError) -> ExitCode {
    log::debug!("run failed: {err:?}");
    prompts::error(&err.to_string());
    ExitCode::FAILURE
}
