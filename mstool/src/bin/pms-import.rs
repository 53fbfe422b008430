use std::path::PathBuf;

use clap::Parser;
use mstool::{ctx::AppContext, utils};

/// Translate legacy renderer profiles into sectioned renderer configs.
#[derive(Parser, Debug)]
#[command(name = "pms-import", version, about)]
struct Args {
    /// PMS directory containing `renderers/*.conf`.
    pms_dir: PathBuf,
    /// Resource directory receiving `renderers/*.conf`.
    resources_dir: PathBuf,
    /// Configuration file (defaults to `.mstool.toml` when present).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    utils::init_logger();
    let args: Args = utils::parse_args();

    utils::run_or_exit(|| {
        let ctx = AppContext::load(args.config)?;
        ctx.import_renderers(&args.pms_dir, &args.resources_dir)?;
        Ok(())
    });
}
