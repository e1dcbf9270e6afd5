//! Error type shared by the library modules.

use std::path::PathBuf;

/// Errors raised while loading data or interpreting user-supplied values.
///
/// The filter and labeler never fail; everything here comes from files,
/// configuration strings or command-line arguments.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to access {}", path.display())]
	Io {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse JSON in {}", path.display())]
	Json {
		path:   PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to encode JSON")]
	Encode(#[from] serde_json::Error),

	#[error("unknown locale '{0}'")]
	UnknownLocale(String),

	#[error("invalid timezone '{0}' (expected \"local\", \"utc\" or an offset like \"+02:00\")")]
	InvalidTimezone(String),

	#[error("invalid date '{0}' (expected YYYY-MM-DD or RFC 3339)")]
	InvalidDate(String),

	#[error("no memory matching '{0}'")]
	MemoryNotFound(String),

	#[error("'{query}' matches several memories: {}", candidates.join(", "))]
	AmbiguousMemory { query: String, candidates: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;
