use std::{fs, io::ErrorKind, path::Path};

use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use uuid::Uuid;

use super::Memory;
use crate::{error::{Error, Result}, events::{MemoryEvent, Observers, Subscription}};

/// The user's memories, kept in creation order.
#[derive(Debug, Default)]
pub struct MemoryBook {
	memories:  Vec<Memory>,
	observers: Observers<MemoryEvent>,
}

impl MemoryBook {
	pub fn new(memories: Vec<Memory>) -> Self { Self { memories, observers: Observers::new() } }

	/// Reads memories from a JSON file. A missing file is an empty book.
	pub fn load(path: &Path) -> Result<Self> {
		let raw = match fs::read_to_string(path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "no memories file yet");
				return Ok(Self::default());
			}
			Err(source) => return Err(Error::Io { path: path.to_path_buf(), source }),
		};
		let memories: Vec<Memory> =
			serde_json::from_str(&raw).map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
		tracing::debug!(path = %path.display(), memories = memories.len(), "loaded memories");
		Ok(Self::new(memories))
	}

	/// Writes all memories to `path`, creating parent directories as needed.
	pub fn save(&self, path: &Path) -> Result<()> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|source| Error::Io { path: parent.to_path_buf(), source })?;
		}
		let json = serde_json::to_string_pretty(&self.memories)?;
		fs::write(path, json).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
		tracing::info!(path = %path.display(), memories = self.memories.len(), "saved memories");
		Ok(())
	}

	/// Registers `callback` for changes until the subscription is dropped.
	pub fn subscribe<F>(&self, callback: F) -> Subscription<MemoryEvent>
	where
		F: Fn(&MemoryEvent) + Send + Sync + 'static,
	{
		self.observers.subscribe(callback)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Memory> { self.memories.iter() }

	pub fn len(&self) -> usize { self.memories.len() }

	pub fn is_empty(&self) -> bool { self.memories.is_empty() }

	pub fn get(&self, id: Uuid) -> Option<&Memory> { self.memories.iter().find(|m| m.id == id) }

	pub fn add(&mut self, memory: Memory) -> Uuid {
		let id = memory.id;
		self.memories.push(memory);
		self.observers.publish(&MemoryEvent::Added(id));
		id
	}

	/// Applies `f` to the memory with `id`. Returns `None` if it does not exist.
	pub fn update<R>(&mut self, id: Uuid, f: impl FnOnce(&mut Memory) -> R) -> Option<R> {
		let memory = self.memories.iter_mut().find(|m| m.id == id)?;
		let result = f(memory);
		self.observers.publish(&MemoryEvent::Updated(id));
		Some(result)
	}

	pub fn remove(&mut self, id: Uuid) -> Option<Memory> {
		let pos = self.memories.iter().position(|m| m.id == id)?;
		let memory = self.memories.remove(pos);
		self.observers.publish(&MemoryEvent::Removed(id));
		Some(memory)
	}

	/// Resolves a memory by id or title pattern.
	///
	/// Tries, in order: an exact UUID, a case-insensitive exact title, a
	/// case-insensitive title substring (ambiguous when several titles contain
	/// it), then the best fuzzy match.
	pub fn resolve(&self, id_or_title: &str) -> Result<&Memory> {
		if let Ok(id) = Uuid::parse_str(id_or_title.trim()) {
			return self.get(id).ok_or_else(|| Error::MemoryNotFound(id_or_title.to_string()));
		}

		let needle = id_or_title.trim().to_lowercase();
		if let Some(exact) = self.memories.iter().find(|m| m.title.to_lowercase() == needle) {
			return Ok(exact);
		}

		let matches: Vec<&Memory> = self.memories.iter().filter(|m| m.title.to_lowercase().contains(&needle)).collect();
		match matches.as_slice() {
			[single] => return Ok(*single),
			[] => {}
			_ => {
				return Err(Error::AmbiguousMemory {
					query:      id_or_title.to_string(),
					candidates: matches.iter().map(|m| m.title.clone()).collect(),
				});
			}
		}

		let matcher = SkimMatcherV2::default();
		self.memories
			.iter()
			.filter_map(|m| matcher.fuzzy_match(&m.title, id_or_title).map(|score| (score, m)))
			.max_by_key(|(score, _)| *score)
			.map(|(_, m)| m)
			.ok_or_else(|| Error::MemoryNotFound(id_or_title.to_string()))
	}
}
