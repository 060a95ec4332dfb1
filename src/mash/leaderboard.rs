use crate::mash::catalog::{self, display_name};
use crate::mash::paths::MashPaths;
use crate::mash::settings;
use crate::mash::store::MashState;
use crate::mash::votelog::{self, VoteRecord};
use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct LeaderboardArgs {
    /// Print the rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub rating: i64,
    pub wins: u32,
    pub losses: u32,
}

pub fn run(args: &LeaderboardArgs, config_dir: &Path) -> Result<()> {
    let settings = settings::load(config_dir)?;
    let catalog = catalog::list_images(&settings.images_dir, &settings.extensions)?;
    let paths = MashPaths::new(config_dir);
    let state = MashState::load(&paths)?;
    let votes = votelog::read_all(&paths.votes_path())?;

    let rows = rows(&catalog, &state, &votes);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Leaderboard:");
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>2}. {:<30} {:>6} (W{} L{})",
            i + 1,
            row.name,
            row.rating,
            row.wins,
            row.losses
        );
    }
    Ok(())
}

/// Projects the standings: every catalog item at its rounded rating (default
/// for items never voted on), best first, name as the tie-break.
pub fn rows(catalog: &[String], state: &MashState, votes: &[VoteRecord]) -> Vec<LeaderboardRow> {
    let mut wins: HashMap<&str, u32> = HashMap::new();
    let mut losses: HashMap<&str, u32> = HashMap::new();
    for vote in votes {
        *wins.entry(vote.winner.as_str()).or_default() += 1;
        *losses.entry(vote.loser.as_str()).or_default() += 1;
    }

    let mut rows = catalog
        .iter()
        .map(|key| LeaderboardRow {
            name: display_name(key).to_string(),
            rating: state.rating(key).round() as i64,
            wins: wins.get(key.as_str()).copied().unwrap_or(0),
            losses: losses.get(key.as_str()).copied().unwrap_or(0),
        })
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.name.cmp(&b.name)));
    rows
}
