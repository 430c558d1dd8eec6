//! File-backed score ledger.
//!
//! One JSON entry per line, append-friendly and human-inspectable. The store
//! is explicitly constructed and injected by the caller (the console layer)
//! and has an explicit open/record/flush lifecycle: nothing writes on drop,
//! and the search core never sees it.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One recorded result: who, how many points, when (unix seconds).
pub struct ScoreEntry {
    pub alias: String,
    pub points: u32,
    pub unix_secs: u64,
}

#[derive(Debug)]
/// Structured errors from the ledger's I/O seams.
pub enum ScoreError {
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

#[derive(Debug)]
/// In-memory view of the ledger file.
pub struct ScoreStore {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl ScoreStore {
    /// Load the ledger at `path`, creating an empty store if the file does
    /// not exist yet. Unreadable lines are skipped rather than failing the
    /// whole load, so a corrupt line cannot wedge the game.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<ScoreStore, ScoreError> {
        let path = path.as_ref().to_path_buf();
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(ScoreStore {
                    path,
                    entries: Vec::new(),
                });
            }
            Err(e) => {
                return Err(ScoreError::Io {
                    stage: "score_open",
                    path: path.display().to_string(),
                    error: e.to_string(),
                });
            }
        };

        let reader = BufReader::new(file);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| ScoreError::Io {
                stage: "score_read",
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(entry) = serde_json::from_str::<ScoreEntry>(&line) {
                entries.push(entry);
            }
        }
        Ok(ScoreStore { path, entries })
    }

    /// Append an entry stamped with the current wall clock.
    pub fn record(&mut self, alias: &str, points: u32) {
        let unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.entries.push(ScoreEntry {
            alias: alias.to_string(),
            points,
            unix_secs,
        });
    }

    /// Entries sorted by points descending; equal points keep their
    /// recorded order.
    pub fn ranked(&self) -> Vec<&ScoreEntry> {
        let mut rows: Vec<&ScoreEntry> = self.entries.iter().collect();
        rows.sort_by(|a, b| b.points.cmp(&a.points));
        rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite the backing file from the in-memory entries.
    pub fn flush(&self) -> Result<(), ScoreError> {
        let file = File::create(&self.path).map_err(|e| ScoreError::Io {
            stage: "score_create",
            path: self.path.display().to_string(),
            error: e.to_string(),
        })?;
        let mut w = BufWriter::new(file);
        for entry in &self.entries {
            let line = serde_json::to_string(entry).map_err(|e| ScoreError::Io {
                stage: "score_serialize",
                path: self.path.display().to_string(),
                error: e.to_string(),
            })?;
            writeln!(w, "{line}").map_err(|e| ScoreError::Io {
                stage: "score_write",
                path: self.path.display().to_string(),
                error: e.to_string(),
            })?;
        }
        w.flush().map_err(|e| ScoreError::Io {
            stage: "score_flush",
            path: self.path.display().to_string(),
            error: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_sorts_by_points_descending() {
        let mut store = ScoreStore {
            path: PathBuf::from("unused"),
            entries: Vec::new(),
        };
        store.record("ana", 300);
        store.record("bo", 950);
        store.record("cy", 300);

        let ranked = store.ranked();
        assert_eq!(ranked[0].alias, "bo");
        // Stable: ana recorded before cy at equal points.
        assert_eq!(ranked[1].alias, "ana");
        assert_eq!(ranked[2].alias, "cy");
    }

    #[test]
    fn missing_file_opens_empty() {
        let store = ScoreStore::open("definitely/not/a/real/scores.jsonl").unwrap();
        assert!(store.is_empty());
    }
}
