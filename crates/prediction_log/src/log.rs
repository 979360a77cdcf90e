use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::warn;

use crate::{LOG_COLUMNS, LogEntry};

/// Append-only CSV log of scored clients.
///
/// The file is shared across sessions with no locking; interleaved writes
/// from concurrent processes are an accepted limitation of its advisory
/// role.
#[derive(Debug, Clone)]
pub struct PredictionLog {
    path: PathBuf,
}

impl PredictionLog {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry, creating the log with its fixed header if absent.
    ///
    /// An existing file whose header does not match [`LOG_COLUMNS`] is
    /// replaced wholesale with a fresh log containing only this entry; the
    /// prior contents are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. Callers report this
    /// without discarding the prediction that was already produced.
    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        if !self.path.exists() {
            return self.write_fresh(entry);
        }

        if self.has_expected_header() {
            let file = OpenOptions::new()
                .append(true)
                .open(&self.path)
                .with_context(|| format!("failed to open {} for append", self.path.display()))?;

            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);
            writer
                .serialize(entry)
                .context("failed to append prediction log entry")?;
            writer.flush().context("failed to flush prediction log")?;
            Ok(())
        } else {
            warn!(
                path = %self.path.display(),
                "prediction log has an incompatible header, replacing it"
            );
            self.write_fresh(entry)
        }
    }

    /// Reads every entry in the log.
    ///
    /// A missing file yields an empty list. A file that cannot be parsed
    /// (wrong header, malformed row, bad timestamp) also yields an empty
    /// list after a warning; the next append rewrites it with the expected
    /// schema.
    #[must_use]
    pub fn load(&self) -> Vec<LogEntry> {
        if !self.path.exists() {
            return Vec::new();
        }

        match self.read_entries() {
            Ok(entries) => entries,
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "prediction log is unreadable, treating it as empty"
                );
                Vec::new()
            }
        }
    }

    fn read_entries(&self) -> Result<Vec<LogEntry>> {
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;

        if !reader.headers()?.iter().eq(LOG_COLUMNS) {
            bail!("unexpected prediction log header");
        }

        let mut entries = Vec::new();
        for row in reader.deserialize() {
            entries.push(row.context("malformed prediction log row")?);
        }
        Ok(entries)
    }

    fn has_expected_header(&self) -> bool {
        let Ok(mut reader) = csv::Reader::from_path(&self.path) else {
            return false;
        };
        reader
            .headers()
            .is_ok_and(|headers| headers.iter().eq(LOG_COLUMNS))
    }

    fn write_fresh(&self, entry: &LogEntry) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("failed to create {}", self.path.display()))?;

        // The header row is derived from the serde field names, which are
        // pinned to LOG_COLUMNS.
        let mut writer = csv::Writer::from_writer(file);
        writer
            .serialize(entry)
            .context("failed to write prediction log entry")?;
        writer.flush().context("failed to flush prediction log")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn entry(age: u32, probability: f32, decision: u8) -> LogEntry {
        LogEntry {
            timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap(),
            age,
            monthly_income: 5000,
            credit_score: 650,
            credit_experience: 2,
            probability,
            decision,
        }
    }

    #[test]
    fn test_append_then_load_round_trips_exactly() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log = PredictionLog::new(dir.path().join("logs_predicoes.csv"));

        let entries = vec![
            entry(35, 0.723_456_8, 1),
            entry(52, 0.123_456_79, 0),
            entry(27, 0.5, 1),
        ];
        for e in &entries {
            log.append(e).expect("append succeeds");
        }

        let loaded = log.load();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_new_log_gets_fixed_header() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("logs_predicoes.csv");
        let log = PredictionLog::new(path.clone());

        log.append(&entry(35, 0.8, 1)).expect("append succeeds");

        let contents = std::fs::read_to_string(&path).expect("log readable");
        let header = contents.lines().next().expect("header line");
        assert_eq!(header, LOG_COLUMNS.join(","));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log = PredictionLog::new(dir.path().join("absent.csv"));
        assert!(log.load().is_empty());
    }

    #[test]
    fn test_corrupt_log_loads_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("logs_predicoes.csv");
        std::fs::write(&path, "timestamp,idade\ngarbage,row,with,extras\n").expect("write");

        let log = PredictionLog::new(path);
        assert!(log.load().is_empty());
    }

    #[test]
    fn test_incompatible_header_is_replaced_not_appended() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("logs_predicoes.csv");
        std::fs::write(&path, "time,age,income\n1,2,3\n").expect("write legacy log");

        let log = PredictionLog::new(path.clone());
        log.append(&entry(41, 0.66, 1)).expect("append succeeds");

        let contents = std::fs::read_to_string(&path).expect("log readable");
        assert!(contents.starts_with(&LOG_COLUMNS.join(",")));
        assert!(!contents.contains("income"));

        let loaded = log.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].age, 41);
    }

    #[test]
    fn test_compatible_log_is_appended_to() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log = PredictionLog::new(dir.path().join("logs_predicoes.csv"));

        log.append(&entry(35, 0.8, 1)).expect("first append");
        log.append(&entry(60, 0.3, 0)).expect("second append");

        let loaded = log.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].age, 35);
        assert_eq!(loaded[1].age, 60);
    }
}
