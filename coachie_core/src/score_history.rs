//! Daily score history persisted as CSV.
//!
//! One row per date. Recording a score rewrites the whole file through a temp
//! file and an atomic rename, so a crash mid-write never leaves a torn history.

use crate::{Error, Result, ScoreBreakdown};
use chrono::NaiveDate;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Scores keyed by date, oldest first
pub type History = BTreeMap<NaiveDate, ScoreBreakdown>;

/// A row in the CSV file
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    date: NaiveDate,
    daily_score: u8,
    health_score: u8,
    wellness_score: u8,
    habits_score: u8,
}

impl Row {
    fn new(date: NaiveDate, score: &ScoreBreakdown) -> Self {
        Row {
            date,
            daily_score: score.daily_score,
            health_score: score.health_score,
            wellness_score: score.wellness_score,
            habits_score: score.habits_score,
        }
    }

    fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            daily_score: self.daily_score,
            health_score: self.health_score,
            wellness_score: self.wellness_score,
            habits_score: self.habits_score,
        }
    }
}

/// CSV-backed score history at `<data_dir>/scores.csv`
pub struct ScoreHistory {
    path: PathBuf,
}

impl ScoreHistory {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join("scores.csv"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every recorded score
    ///
    /// Missing file yields an empty history; malformed rows are skipped.
    pub fn load(&self) -> Result<History> {
        if !self.path.exists() {
            return Ok(History::new());
        }
        let lock = self.open_lock()?;
        lock.lock_shared()?;
        let history = read_rows(&self.path);
        lock.unlock()?;
        history
    }

    /// Insert or replace the score for `date`
    pub fn record(&self, date: NaiveDate, score: &ScoreBreakdown) -> Result<()> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;

        let result = read_rows(&self.path).and_then(|mut history| {
            history.insert(date, *score);
            write_rows(&self.path, &history)
        });
        lock.unlock()?;
        result?;

        tracing::debug!("Recorded score {} for {}", score.daily_score, date);
        Ok(())
    }

    /// Readers and writers serialize on a sidecar lock file, since the data
    /// file itself is replaced by rename on every write.
    fn open_lock(&self) -> Result<File> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| Error::Store(format!("{:?} has no parent directory", self.path)))?;
        std::fs::create_dir_all(parent)?;
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.path.with_extension("csv.lock"))?;
        Ok(lock)
    }
}

fn read_rows(path: &Path) -> Result<History> {
    let mut history = History::new();
    if !path.exists() {
        return Ok(history);
    }

    let mut reader = csv::Reader::from_path(path)?;
    for (idx, row) in reader.deserialize::<Row>().enumerate() {
        match row {
            Ok(row) => {
                history.insert(row.date, row.breakdown());
            }
            Err(e) => {
                // +2 for the header and 1-based numbering
                tracing::warn!("Skipping malformed score row {}: {}", idx + 2, e);
            }
        }
    }

    Ok(history)
}

fn write_rows(path: &Path, history: &History) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::Store(format!("{:?} has no parent directory", path)))?;
    let temp = NamedTempFile::new_in(parent)?;

    {
        let mut writer = csv::Writer::from_writer(temp.as_file());
        for (date, score) in history {
            writer.serialize(Row::new(*date, score))?;
        }
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
