use crate::mash::elo::{self, INITIAL_RATING, K_FACTOR};
use crate::mash::paths::MashPaths;
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Wins in a row before an item is benched.
pub const STREAK_LIMIT: u32 = 3;
/// Rounds a benched item sits out.
pub const REST_ROUNDS: u32 = 8;
/// Upper bound on remembered matchups; oldest fall off first.
pub const RECENT_LIMIT: usize = 20;

/// The whole persisted state of the app: ratings, win streaks, rotation
/// countdowns and the recent-matchup buffer. Items exist lazily; anything
/// not in a map reads as its default.
#[derive(Debug, Default, Clone)]
pub struct MashState {
    ratings: HashMap<String, f64>,
    streaks: HashMap<String, u32>,
    exclusions: HashMap<String, u32>,
    recent: Vec<(String, String)>,
}

impl MashState {
    /// Loads state from disk. Files that do not exist yet read as empty.
    pub fn load(paths: &MashPaths) -> Result<Self> {
        Ok(Self {
            ratings: read_json_or_default(&paths.ratings_path())?,
            streaks: read_json_or_default(&paths.streaks_path())?,
            exclusions: read_json_or_default(&paths.exclusions_path())?,
            recent: read_json_or_default(&paths.recent_matchups_path())?,
        })
    }

    /// Writes every collection back out. Last write wins; there is no
    /// cross-process locking (single-process use).
    pub fn save(&self, paths: &MashPaths) -> Result<()> {
        paths.ensure_dirs()?;
        write_json(&paths.ratings_path(), &self.ratings)?;
        write_json(&paths.streaks_path(), &self.streaks)?;
        write_json(&paths.exclusions_path(), &self.exclusions)?;
        write_json(&paths.recent_matchups_path(), &self.recent)?;
        Ok(())
    }

    pub fn rating(&self, key: &str) -> f64 {
        self.ratings.get(key).copied().unwrap_or(INITIAL_RATING)
    }

    pub fn set_rating(&mut self, key: &str, rating: f64) {
        self.ratings.insert(key.to_string(), rating);
    }

    pub fn streak(&self, key: &str) -> u32 {
        self.streaks.get(key).copied().unwrap_or(0)
    }

    pub fn exclusion(&self, key: &str) -> u32 {
        self.exclusions.get(key).copied().unwrap_or(0)
    }

    pub fn clear_exclusions(&mut self) {
        self.exclusions.clear();
    }

    /// Whether this unordered pair is in the recent buffer, either way round.
    pub fn was_recent(&self, a: &str, b: &str) -> bool {
        self.recent
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn note_matchup(&mut self, a: &str, b: &str) {
        self.recent.push((a.to_string(), b.to_string()));
        if self.recent.len() > RECENT_LIMIT {
            let excess = self.recent.len() - RECENT_LIMIT;
            self.recent.drain(..excess);
        }
    }

    pub fn recent_matchups(&self) -> &[(String, String)] {
        &self.recent
    }

    /// Applies one decided duel: Elo movement for both sides, streak
    /// bookkeeping, and the forced-rotation countdowns. A third straight win
    /// benches the winner for the next `REST_ROUNDS` rounds; every other
    /// benched item moves one round closer to eligibility.
    pub fn record_outcome(&mut self, winner: &str, loser: &str) {
        let (new_winner, new_loser) =
            elo::update_duel(self.rating(winner), self.rating(loser), K_FACTOR);
        self.set_rating(winner, new_winner);
        self.set_rating(loser, new_loser);

        let streak = self.streak(winner) + 1;
        self.streaks.insert(winner.to_string(), streak);
        self.streaks.insert(loser.to_string(), 0);

        if streak >= STREAK_LIMIT {
            self.exclusions.insert(winner.to_string(), REST_ROUNDS);
            self.streaks.insert(winner.to_string(), 0);
        }

        for (key, countdown) in self.exclusions.iter_mut() {
            if key != winner && *countdown > 0 {
                *countdown -= 1;
            }
        }
    }
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&content).with_context(|| format!("parse json in {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).context("serialize json")?;
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
