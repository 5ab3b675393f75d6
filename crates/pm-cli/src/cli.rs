use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pm")]
#[command(about = "Project board: enter projects and watch the lists update")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to an interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config directory (overrides PM_CONFIG_DIR and ./.pm/)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}
