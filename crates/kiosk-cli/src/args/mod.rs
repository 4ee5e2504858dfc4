// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - `catalog dates` / `catalog prices` / `catalog shows` mirror the three
//   independent read contracts and group naturally under one namespace
// - `book` and `tui` are the two booking surfaces (one-shot and interactive)
// - Improves --help discoverability as commands accrete

mod commands;

pub use commands::*;

use clap::Parser;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "kiosk")]
#[command(about = "Book museum tickets from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Backend base URL (overrides config and KIOSK_BACKEND_URL)"
    )]
    pub backend_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Directory holding config.toml")]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
