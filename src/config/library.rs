use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Library and memory file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
	/// Music library JSON export (defaults to the data directory)
	#[serde(default)]
	pub library_path: Option<PathBuf>,

	/// Memories JSON file (defaults to the data directory)
	#[serde(default)]
	pub memories_path: Option<PathBuf>,

	/// Maximum number of songs `suggest` prints (0 = no limit)
	#[serde(default = "default_suggestion_limit")]
	pub suggestion_limit: usize,
}

const fn default_suggestion_limit() -> usize { 50 }

impl Default for LibraryConfig {
	fn default() -> Self { Self { library_path: None, memories_path: None, suggestion_limit: default_suggestion_limit() } }
}
