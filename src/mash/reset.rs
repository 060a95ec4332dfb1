use crate::mash::paths::MashPaths;
use anyhow::Result;
use clap::Args;
use inquire::Confirm;
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub fn run(args: &ResetArgs, config_dir: &Path) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::new("Clear all ratings and matchup state?")
            .with_default(false)
            .prompt()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    clear_state(&MashPaths::new(config_dir))?;
    println!("✅ Ratings and matchup state cleared");
    Ok(())
}

/// Removes every persisted state file. Safe to call when nothing exists yet.
pub fn clear_state(paths: &MashPaths) -> Result<()> {
    for path in [
        paths.ratings_path(),
        paths.streaks_path(),
        paths.exclusions_path(),
        paths.recent_matchups_path(),
        paths.votes_path(),
    ] {
        if path.exists() {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
