//! Per-day health log persistence.
//!
//! Each calendar day gets its own JSONL (JSON Lines) file under
//! `<data_dir>/logs/YYYY-MM-DD.jsonl`. Appends take an exclusive file lock and
//! reads a shared one, so concurrent `coachie` processes never interleave lines.

use crate::{DailyLog, Error, HealthLog, Result};
use chrono::NaiveDate;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Sink for persisting health logs
pub trait LogSink {
    fn append(&mut self, date: NaiveDate, log: &HealthLog) -> Result<()>;
}

/// JSONL-backed log store with file locking
pub struct LogStore {
    dir: PathBuf,
}

impl LogStore {
    /// Create a store rooted at `<data_dir>/logs`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: data_dir.as_ref().join("logs"),
        }
    }

    /// Path of the file holding one day's logs
    pub fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.jsonl", date.format("%Y-%m-%d")))
    }

    /// Load every log recorded on `date`
    ///
    /// Returns an empty day if nothing was logged. Unparsable lines are
    /// skipped with a warning rather than failing the whole day.
    pub fn load_day(&self, date: NaiveDate) -> Result<DailyLog> {
        let logs = read_logs(&self.day_path(date))?;
        Ok(DailyLog::from_logs(date, logs))
    }

    /// Dates that have a log file, oldest first
    pub fn logged_dates(&self) -> Result<Vec<NaiveDate>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "jsonl") {
                let parsed = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
                match parsed {
                    Some(date) => dates.push(date),
                    None => tracing::debug!("Ignoring unexpected file in log dir: {:?}", path),
                }
            }
        }

        dates.sort();
        Ok(dates)
    }
}

impl LogSink for LogStore {
    fn append(&mut self, date: NaiveDate, log: &HealthLog) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.day_path(date);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.lock_exclusive()?;

        let line = serde_json::to_string(log)?;
        let written = {
            let mut writer = std::io::BufWriter::new(&file);
            writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .and_then(|_| writer.flush())
        };
        file.unlock()?;
        written.map_err(|e| Error::Store(format!("Failed to append to {:?}: {}", path, e)))?;

        tracing::debug!("Appended {} log {} to {:?}", log.entry.kind(), log.id, path);
        Ok(())
    }
}

/// Read all logs from a JSONL file
pub fn read_logs(path: &Path) -> Result<Vec<HealthLog>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut logs = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = match line_result {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Failed to read line {} of {:?}: {}", line_num + 1, path, e);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<HealthLog>(&line) {
            Ok(log) => logs.push(log),
            Err(e) => {
                tracing::warn!("Failed to parse log at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} logs from {:?}", logs.len(), path);
    Ok(logs)
}
