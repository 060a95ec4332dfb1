use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// One decided duel, appended to `votes.jsonl` as it happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRecord {
    pub winner: String,
    pub loser: String,
    pub ts_ms: u64,
}

impl VoteRecord {
    pub fn new(winner: &str, loser: &str) -> Self {
        Self {
            winner: winner.to_string(),
            loser: loser.to_string(),
            ts_ms: now_ms(),
        }
    }
}

pub fn append(path: &Path, record: &VoteRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;
    serde_json::to_writer(&mut file, record).context("serialize vote")?;
    file.write_all(b"\n").context("write vote")?;
    Ok(())
}

/// Reads the whole log; a log that does not exist yet is empty, not an error.
pub fn read_all(path: &Path) -> Result<Vec<VoteRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut votes = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let vote = serde_json::from_str::<VoteRecord>(&line)
            .with_context(|| format!("parse vote at {}:{}", path.display(), idx + 1))?;
        votes.push(vote);
    }
    Ok(votes)
}

fn now_ms() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.as_millis() as u64
}
