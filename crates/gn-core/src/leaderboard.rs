//! Leaderboard (ranked results)
//!
//! Records how many attempts each winning player needed, best first, and
//! keeps a flat text file in sync with the in-memory ranking.
//!
//! Record format is one `<name> <attempts>` pair per line.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::error::{EntryError, LeaderboardError, StorageError};

/// A single leaderboard record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    player_name: String,
    attempts: u32,
}

impl LeaderboardEntry {
    /// Create an entry, rejecting names the record format cannot hold
    pub fn new(player_name: impl Into<String>, attempts: u32) -> Result<Self, EntryError> {
        let player_name = player_name.into();
        if player_name.is_empty() {
            return Err(EntryError::EmptyName);
        }
        if player_name.chars().any(char::is_whitespace) {
            return Err(EntryError::WhitespaceInName(player_name));
        }
        if attempts == 0 {
            return Err(EntryError::ZeroAttempts);
        }
        Ok(Self {
            player_name,
            attempts,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Parse leaderboard records.
///
/// The content is read as a stream of whitespace-separated tokens taken in
/// `name count` pairs. Reading stops at the first count that is not a
/// non-negative integer, or at a trailing name with no count; every record
/// before it is kept. A record that parses but is not a valid entry (a zero
/// count) is skipped on its own.
pub fn parse_entries(contents: &str) -> Vec<LeaderboardEntry> {
    let mut entries = Vec::new();
    let mut tokens = contents.split_whitespace();

    while let Some(name) = tokens.next() {
        let Some(count) = tokens.next() else {
            warn!(name, "leaderboard record has no attempt count; ignoring rest of file");
            break;
        };
        let Ok(attempts) = count.parse::<u32>() else {
            warn!(name, count, "malformed leaderboard record; ignoring rest of file");
            break;
        };
        match LeaderboardEntry::new(name, attempts) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!(name, attempts, error = %e, "skipping invalid leaderboard record"),
        }
    }

    entries
}

/// Render records in the on-disk format
pub fn format_entries(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.player_name);
        out.push(' ');
        out.push_str(&entry.attempts.to_string());
        out.push('\n');
    }
    out
}

/// Durable medium holding the serialized leaderboard
pub trait LeaderboardStorage {
    /// Read the full serialized leaderboard, or `None` if nothing was ever stored
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored leaderboard with `contents`
    fn write(&mut self, contents: &str) -> Result<(), StorageError>;
}

/// Leaderboard kept in a text file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_err(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl LeaderboardStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Write to a sibling temp file, then rename it over the target so a
    /// reader never sees a half-written leaderboard.
    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        let tmp = self.temp_path();

        let result = File::create(&tmp).and_then(|file| {
            let mut writer = BufWriter::new(file);
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
            writer.get_ref().sync_all()
        });
        if let Err(e) = result.and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_err(e));
        }
        Ok(())
    }
}

/// In-memory leaderboard storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with serialized records
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            read_only: false,
        }
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl LeaderboardStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Unavailable("storage is read-only".to_string()));
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

/// Ranked leaderboard backed by a storage handle
#[derive(Debug)]
pub struct Leaderboard<S: LeaderboardStorage = FileStorage> {
    entries: Vec<LeaderboardEntry>,
    storage: S,
}

impl<S: LeaderboardStorage> Leaderboard<S> {
    /// Load the leaderboard from `storage`.
    ///
    /// Storage that has never been written yields an empty leaderboard.
    pub fn load(storage: S) -> Result<Self, StorageError> {
        let mut entries = match storage.read()? {
            Some(contents) => parse_entries(&contents),
            None => Vec::new(),
        };
        entries.sort_by_key(|e| e.attempts);

        Ok(Self { entries, storage })
    }

    /// Record a result and persist the whole leaderboard.
    ///
    /// Returns the 1-indexed rank of the new entry. Entries with equal
    /// attempt counts keep their insertion order. If persisting fails the
    /// entry stays in memory and [`Leaderboard::save`] can be retried.
    pub fn add_entry(
        &mut self,
        player_name: impl Into<String>,
        attempts: u32,
    ) -> Result<usize, LeaderboardError> {
        let entry = LeaderboardEntry::new(player_name, attempts)?;
        let rank = self.rank_for(attempts);
        info!(player = %entry.player_name, attempts, rank, "recording leaderboard entry");

        self.entries.push(entry);
        self.entries.sort_by_key(|e| e.attempts);

        self.save()?;
        Ok(rank)
    }

    /// Rewrite the backing store from the in-memory entries
    pub fn save(&mut self) -> Result<(), StorageError> {
        let contents = format_entries(&self.entries);
        self.storage.write(&contents).inspect_err(|e| {
            error!(error = %e, "failed to persist leaderboard");
        })
    }

    /// All entries, best first
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top N entries
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        let end = n.min(self.entries.len());
        &self.entries[..end]
    }

    /// Best entry (fewest attempts)
    pub fn best(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    /// Entries for a specific player
    pub fn player_entries(&self, name: &str) -> Vec<&LeaderboardEntry> {
        self.entries
            .iter()
            .filter(|e| e.player_name.eq_ignore_ascii_case(name))
            .collect()
    }

    /// Rank a result with `attempts` would get, without adding it.
    ///
    /// Ties rank after the existing entries.
    pub fn rank_for(&self, attempts: u32) -> usize {
        self.entries.partition_point(|e| e.attempts <= attempts) + 1
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
