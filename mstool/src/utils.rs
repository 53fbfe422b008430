//! Helpers shared by the binary targets.
//!
//! All binaries exit with status 1 on usage errors and on any failure,
//! printing a diagnostic to stderr.

use std::process;

use clap::{Parser, ValueEnum, error::ErrorKind};
use colored::Colorize;
use schema_embed::ArrayStyle;

/// Initializes `env_logger`. The default level is `warn`, `RUST_LOG`
/// overrides it.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Parses the command line, exiting with status 1 on usage errors.
///
/// `--help` and `--version` keep clap's behaviour and exit with status 0.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    }
}

/// Runs `f`, printing the error chain and exiting with status 1 on failure.
pub fn run_or_exit(f: impl FnOnce() -> anyhow::Result<()>) {
    if let Err(e) = f() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

/// Command line spelling of [`ArrayStyle`].
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StyleArg {
    /// `static const char* name[] = { ... };`
    C,
    /// `pub static NAME: &[&str] = &[ ... ];`
    Rust,
}

impl From<StyleArg> for ArrayStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::C => ArrayStyle::C,
            StyleArg::Rust => ArrayStyle::Rust,
        }
    }
}
