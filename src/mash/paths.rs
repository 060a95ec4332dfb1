use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

const STATE_DIR: &str = "state";

#[derive(Debug, Clone)]
pub struct MashPaths {
    pub state_dir: PathBuf,
}

impl MashPaths {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            state_dir: config_dir.join(STATE_DIR),
        }
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.state_dir)?;
        Ok(())
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.state_dir.join("ratings.json")
    }

    pub fn streaks_path(&self) -> PathBuf {
        self.state_dir.join("streaks.json")
    }

    pub fn exclusions_path(&self) -> PathBuf {
        self.state_dir.join("exclusions.json")
    }

    pub fn recent_matchups_path(&self) -> PathBuf {
        self.state_dir.join("recent_matchups.json")
    }

    pub fn votes_path(&self) -> PathBuf {
        self.state_dir.join("votes.jsonl")
    }
}
