//! Mood journal persistence.
//!
//! Mood entries are appended to a JSONL (JSON Lines) file with file locking
//! so that concurrent writers never interleave lines. Locks are taken on a
//! sibling `<journal>.lock` file rather than the journal itself, because
//! [`JsonlMoodJournal::compact`] replaces the journal inode. Readers only ever see
//! the most recent entries through [`RecentMoodHistory`]; the analytics in
//! [`crate::mood`] take a plain slice and do not care where it came from.

use crate::{Error, MoodEntry, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Number of recent entries the dashboard works with
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Source of recent mood history
pub trait RecentMoodHistory {
    /// Up to `limit` entries, newest first
    fn recent(&self, limit: usize) -> Result<Vec<MoodEntry>>;
}

impl RecentMoodHistory for Vec<MoodEntry> {
    fn recent(&self, limit: usize) -> Result<Vec<MoodEntry>> {
        Ok(newest_first(self.clone(), limit))
    }
}

/// Sort newest first and cut to `limit`. Entries with equal timestamps keep
/// the later-recorded one first.
fn newest_first(mut entries: Vec<MoodEntry>, limit: usize) -> Vec<MoodEntry> {
    entries.reverse();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);
    entries
}

/// JSONL-backed mood journal with file locking
pub struct JsonlMoodJournal {
    path: PathBuf,
}

impl JsonlMoodJournal {
    /// Create a journal for the given path (the file is created on first append)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the lock file guarding the journal
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn open_lock(&self) -> Result<File> {
        self.ensure_parent_dir()?;
        let lock = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(self.lock_path())?;
        Ok(lock)
    }

    /// Append one entry
    pub fn append(&mut self, entry: &MoodEntry) -> Result<()> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;

        let result = self.append_locked(entry);

        lock.unlock()?;
        result?;

        tracing::debug!("Appended mood entry {} to journal", entry.id);
        Ok(())
    }

    fn append_locked(&self, entry: &MoodEntry) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(entry)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Read every entry in file (recording) order
    ///
    /// A missing journal reads as empty. Lines that fail to parse are
    /// skipped with a warning.
    pub fn read_all(&self) -> Result<Vec<MoodEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let lock = self.open_lock()?;
        lock.lock_shared()?;
        let entries = File::open(&self.path)
            .map_err(Error::from)
            .and_then(|file| parse_lines(&file));
        lock.unlock()?;

        let entries = entries?;
        tracing::debug!("Read {} mood entries from journal", entries.len());
        Ok(entries)
    }

    /// Rewrite the journal keeping only the `keep` newest entries
    ///
    /// The new contents go to a temp file in the same directory which then
    /// replaces the journal. Appends wait on the same lock, so none are lost
    /// to the swap. Returns the number of entries dropped.
    pub fn compact(&mut self, keep: usize) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let lock = self.open_lock()?;
        lock.lock_exclusive()?;

        let result = self.rewrite_locked(keep);

        lock.unlock()?;
        result
    }

    fn rewrite_locked(&self, keep: usize) -> Result<usize> {
        let entries = match File::open(&self.path) {
            Ok(file) => parse_lines(&file)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let total = entries.len();
        if total <= keep {
            return Ok(0);
        }

        // Newest `keep`, written back oldest first so appends stay chronological
        let mut kept = newest_first(entries, keep);
        kept.reverse();

        let parent = self
            .path
            .parent()
            .ok_or_else(|| Error::Journal("journal path missing parent".into()))?;
        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            for entry in &kept {
                writer.write_all(serde_json::to_string(entry)?.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        let dropped = total - kept.len();
        tracing::info!("Compacted mood journal: kept {}, dropped {}", kept.len(), dropped);
        Ok(dropped)
    }
}

impl RecentMoodHistory for JsonlMoodJournal {
    fn recent(&self, limit: usize) -> Result<Vec<MoodEntry>> {
        Ok(newest_first(self.read_all()?, limit))
    }
}

fn parse_lines(file: &File) -> Result<Vec<MoodEntry>> {
    let reader = BufReader::new(file);
    let mut entries = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<MoodEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Failed to parse mood entry at line {}: {}", line_num + 1, e);
            }
        }
    }

    Ok(entries)
}
