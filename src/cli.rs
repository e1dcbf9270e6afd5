//! Command-line interface for music-memories.
//!
//! - suggest: Songs added during a date span
//! - label: Render the label for a start/end pair
//! - sections: The library grouped by the day songs were added
//! - list / add / show / refresh: Manage memories
//! - config: Generate or show the configuration file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main CLI structure parsed by clap.
#[derive(Parser)]
#[command(name = "memories")]
#[command(about = "Curate dated memories of songs from your music library", long_about = None)]
pub struct Cli {
	/// Minimum log level (trace, debug, info, warn, error) or a tracing filter
	#[arg(long, global = true, default_value = "warn")]
	pub log_level: String,

	/// Music library JSON export (overrides the config file)
	#[arg(long, global = true)]
	pub library: Option<PathBuf>,

	/// Memories JSON file (overrides the config file)
	#[arg(long, global = true)]
	pub memories: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
	/// List songs added strictly between two dates
	Suggest {
		/// Start of the span (YYYY-MM-DD or RFC 3339), exclusive
		#[arg(short, long)]
		start: String,
		/// End of the span (YYYY-MM-DD or RFC 3339), exclusive
		#[arg(short, long)]
		end:   String,
		/// Limit number of results (overrides the config file, 0 = no limit)
		#[arg(short, long)]
		limit: Option<usize>,
		/// Group the results under per-day headers
		#[arg(long)]
		sections: bool,
	},
	/// Print the label for an optional start and end date
	Label {
		#[arg(short, long)]
		start: Option<String>,
		#[arg(short, long)]
		end: Option<String>,
		/// Use the long-form range shown in reminders
		#[arg(short, long)]
		notification: bool,
	},
	/// Show the whole library grouped by the day songs were added
	Sections,
	/// List all memories
	List,
	/// Create a new memory
	Add {
		title: String,
		#[arg(short, long)]
		start: Option<String>,
		#[arg(short, long)]
		end: Option<String>,
		#[arg(short, long)]
		description: Option<String>,
		/// Add library songs from the span now and on every refresh
		#[arg(short, long)]
		auto: bool,
	},
	/// Show a memory (by ID or title pattern)
	Show {
		/// Memory ID or title pattern to search
		id_or_title: String,
	},
	/// Add newly matching songs to auto-updating memories
	Refresh {
		/// Only refresh this memory (ID or title pattern)
		id_or_title: Option<String>,
	},
	/// Generate the default configuration file, or show the current one
	Config {
		#[arg(long)]
		show: bool,
	},
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() { Cli::command().debug_assert(); }

	#[test]
	fn global_flags_work_after_the_subcommand() {
		let cli = Cli::try_parse_from(["memories", "list", "--memories", "/tmp/m.json", "--log-level", "debug"]).unwrap();
		assert_eq!(cli.memories, Some(PathBuf::from("/tmp/m.json")));
		assert_eq!(cli.log_level, "debug");
		assert!(matches!(cli.command, Commands::List));
	}

	#[test]
	fn suggest_requires_both_dates() {
		assert!(Cli::try_parse_from(["memories", "suggest", "--start", "2020-03-01"]).is_err());
		let cli = Cli::try_parse_from(["memories", "suggest", "-s", "2020-03-01", "-e", "2020-03-10", "--sections"]).unwrap();
		assert!(matches!(cli.command, Commands::Suggest { sections: true, limit: None, .. }));
	}
}
