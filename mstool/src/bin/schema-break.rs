use std::path::PathBuf;

use clap::Parser;
use mstool::{
    ctx::AppContext,
    utils::{self, StyleArg},
};

/// Escape a SQL schema file into a string array declaration.
#[derive(Parser, Debug)]
#[command(name = "schema-break", version, about)]
struct Args {
    /// Schema file to read.
    input: PathBuf,
    /// Generated source file to write.
    output: PathBuf,
    /// Output syntax, overrides the configured style.
    #[arg(short, long, value_enum)]
    style: Option<StyleArg>,
    /// Configuration file (defaults to `.mstool.toml` when present).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    utils::init_logger();
    let args: Args = utils::parse_args();

    utils::run_or_exit(|| {
        let ctx = AppContext::load(args.config)?;
        ctx.embed_schema(&args.input, &args.output, args.style.map(Into::into))?;
        Ok(())
    });
}
