//! The user's music library, read from a JSON export.
//!
//! Accepted shapes:
//! - a bare array of songs: `[{ "persistent_id": 1, ... }]`
//! - an object with a `songs` array: `{ "songs": [...] }`

mod filter;
mod sections;

use std::{collections::HashMap, fs, path::Path};

use chrono::{DateTime, Utc};
pub use filter::select_items_in_range;
pub use sections::{DaySection, group_by_day};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Anything carrying an immutable acquisition timestamp.
pub trait Timestamped {
	fn timestamp(&self) -> DateTime<Utc>;
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
	fn timestamp(&self) -> DateTime<Utc> { (**self).timestamp() }
}

/// A single library entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
	pub persistent_id: u64,
	pub title:         String,
	#[serde(default)]
	pub artist:        String,
	#[serde(default)]
	pub album:         String,
	pub date_added:    DateTime<Utc>,
	#[serde(default)]
	pub play_count:    u32,
}

impl Timestamped for Song {
	fn timestamp(&self) -> DateTime<Utc> { self.date_added }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LibraryFile {
	Bare(Vec<Song>),
	Wrapped { songs: Vec<Song> },
}

/// Songs in the order the export listed them.
#[derive(Debug, Clone, Default)]
pub struct Library {
	songs: Vec<Song>,
	index: HashMap<u64, usize>,
}

impl Library {
	pub fn new(songs: Vec<Song>) -> Self {
		let index = songs.iter().enumerate().map(|(pos, song)| (song.persistent_id, pos)).collect();
		Self { songs, index }
	}

	/// Reads a library export from disk.
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
		let file: LibraryFile =
			serde_json::from_str(&raw).map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
		let songs = match file {
			LibraryFile::Bare(songs) | LibraryFile::Wrapped { songs } => songs,
		};
		tracing::debug!(path = %path.display(), songs = songs.len(), "loaded music library");
		Ok(Self::new(songs))
	}

	pub fn songs(&self) -> &[Song] { &self.songs }

	pub fn len(&self) -> usize { self.songs.len() }

	pub fn is_empty(&self) -> bool { self.songs.is_empty() }

	pub fn get(&self, persistent_id: u64) -> Option<&Song> { self.index.get(&persistent_id).map(|&pos| &self.songs[pos]) }
}
