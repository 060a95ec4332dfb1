use crate::config::{ENV_CONFIG_DIR, resolve_config_dir, resolve_config_dir_with};
use crate::mash::duel::{self, DuelArgs};
use crate::mash::leaderboard::{self, LeaderboardArgs};
use crate::mash::reset::{self, ResetArgs};
use crate::mash::settings::{self, InitArgs};
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration directory for imgmash (default: platform config dir)
    #[arg(short = 'C', long = "config-dir", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Print the resolved configuration directory path and exit
    #[arg(long)]
    pub print_config_dir_path: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a settings template into the config directory
    Init(InitArgs),
    /// Run head-to-head image duels and vote on them
    Duel(DuelArgs),
    /// Print the current standings
    Leaderboard(LeaderboardArgs),
    /// Clear all ratings and matchup state
    Reset(ResetArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config_dir_path {
        let env_override = env::var(ENV_CONFIG_DIR).ok();
        let config_dir =
            resolve_config_dir_with(cli.config_dir.as_deref(), env_override.as_deref())?;
        println!("{}", config_dir.display());
        return Ok(());
    }

    let Some(command) = cli.command.as_ref() else {
        let mut command = Cli::command();
        command.print_help()?;
        println!();
        return Ok(());
    };

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;

    match command {
        Commands::Init(args) => settings::run_init(args, &config_dir),
        Commands::Duel(args) => duel::run(args, &config_dir),
        Commands::Leaderboard(args) => leaderboard::run(args, &config_dir),
        Commands::Reset(args) => reset::run(args, &config_dir),
    }
}
