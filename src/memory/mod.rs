//! Memories: named, dated collections of songs.

mod book;
mod reminder;

use std::collections::HashSet;

pub use book::MemoryBook;
use chrono::{DateTime, Utc};
pub use reminder::Reminder;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{dates::MemoryDateSpan, library::{Library, Song}};

/// Per-memory settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemorySettings {
	/// Append library songs added inside the memory's span on refresh.
	#[serde(default)]
	pub update_automatically: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
	pub id:          Uuid,
	pub title:       String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default)]
	pub span:        MemoryDateSpan,
	#[serde(default)]
	pub song_ids:    Vec<u64>,
	#[serde(default)]
	pub settings:    MemorySettings,
	pub created_at:  DateTime<Utc>,
}

impl Memory {
	pub fn new(title: impl Into<String>, span: MemoryDateSpan) -> Self {
		Self {
			id: Uuid::new_v4(),
			title: title.into(),
			description: None,
			span,
			song_ids: Vec::new(),
			settings: MemorySettings::default(),
			created_at: Utc::now(),
		}
	}

	/// The memory's songs in memory order. Ids missing from `library` are skipped.
	pub fn songs<'a>(&self, library: &'a Library) -> Vec<&'a Song> {
		self.song_ids.iter().filter_map(|id| library.get(*id)).collect()
	}

	/// Library songs added strictly inside the span that the memory lacks.
	///
	/// Empty unless both span dates are set.
	pub fn suggestions<'a>(&self, library: &'a Library) -> Vec<&'a Song> {
		let Some(interval) = self.span.interval() else {
			return Vec::new();
		};
		let present: HashSet<u64> = self.song_ids.iter().copied().collect();
		interval.select(library.songs()).into_iter().filter(|song| !present.contains(&song.persistent_id)).collect()
	}

	/// Appends the current suggestions when automatic updates are enabled.
	/// Returns how many songs were added.
	pub fn refresh_from(&mut self, library: &Library) -> usize {
		if !self.settings.update_automatically {
			return 0;
		}
		let added: Vec<u64> = self.suggestions(library).iter().map(|song| song.persistent_id).collect();
		self.song_ids.extend(&added);
		added.len()
	}
}
