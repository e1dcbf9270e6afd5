mod config;
mod dates;
mod memories;

use std::path::PathBuf;

use anyhow::{Context, Result};
pub use config::handle_config;
pub use dates::{handle_label, handle_sections, handle_suggest};
pub use memories::{handle_add, handle_list, handle_refresh, handle_show};
use music_memories::{Config, Library, MemoryBook};

use crate::cli::Commands;

/// Everything a command needs: the loaded configuration and resolved paths.
pub struct Session {
	pub config:    Config,
	library_path:  PathBuf,
	memories_path: PathBuf,
}

impl Session {
	/// Resolves data paths, letting command-line overrides win over the config.
	pub fn new(config: Config, library: Option<PathBuf>, memories: Option<PathBuf>) -> Result<Self> {
		let library_path = match library {
			Some(path) => path,
			None => config.library_path()?,
		};
		let memories_path = match memories {
			Some(path) => path,
			None => config.memories_path()?,
		};
		Ok(Self { config, library_path, memories_path })
	}

	pub fn library(&self) -> Result<Library> {
		Library::load(&self.library_path)
			.context("Failed to load music library (pass --library or set library.library_path)")
	}

	pub fn memories(&self) -> Result<MemoryBook> {
		MemoryBook::load(&self.memories_path).context("Failed to load memories")
	}

	pub fn save_memories(&self, book: &MemoryBook) -> Result<()> {
		book.save(&self.memories_path).context("Failed to save memories")
	}
}

/// Dispatches CLI commands to their respective handlers
pub fn handle_command(session: &Session, cmd: Commands) -> Result<()> {
	match cmd {
		Commands::Suggest { start, end, limit, sections } => handle_suggest(session, &start, &end, limit, sections),
		Commands::Label { start, end, notification } => {
			handle_label(session, start.as_deref(), end.as_deref(), notification)
		}
		Commands::Sections => handle_sections(session),
		Commands::List => handle_list(session),
		Commands::Add { title, start, end, description, auto } => {
			handle_add(session, title, start.as_deref(), end.as_deref(), description, auto)
		}
		Commands::Show { id_or_title } => handle_show(session, &id_or_title),
		Commands::Refresh { id_or_title } => handle_refresh(session, id_or_title.as_deref()),
		Commands::Config { .. } => Ok(()), // Never reached - handled in main.rs before a session exists
	}
}
