use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mstool::{
    ctx::AppContext,
    utils::{self, StyleArg},
};

/// Build-time preprocessors for the media server resources.
#[derive(Parser, Debug)]
#[command(name = "mstool", version, about)]
struct Cli {
    /// Configuration file (defaults to `.mstool.toml` when present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Subcommand, Debug)]
enum SubCommands {
    /// Translate legacy renderer profiles into sectioned renderer configs.
    Import {
        /// Directory containing the legacy `renderers/` directory.
        pms_dir: PathBuf,
        /// Resource directory receiving the translated `renderers/` files.
        resources_dir: PathBuf,
    },
    /// Escape a SQL schema file into a string array declaration.
    Schema {
        /// Schema file to read.
        input: PathBuf,
        /// Generated source file to write.
        output: PathBuf,
        /// Output syntax, overrides the configured style.
        #[arg(short, long, value_enum)]
        style: Option<StyleArg>,
    },
}

fn main() {
    utils::init_logger();
    let cli: Cli = utils::parse_args();

    utils::run_or_exit(|| {
        let ctx = AppContext::load(cli.config)?;

        match cli.command {
            SubCommands::Import {
                pms_dir,
                resources_dir,
            } => {
                ctx.import_renderers(&pms_dir, &resources_dir)?;
            }
            SubCommands::Schema {
                input,
                output,
                style,
            } => {
                ctx.embed_schema(&input, &output, style.map(Into::into))?;
            }
        }
        Ok(())
    });
}
