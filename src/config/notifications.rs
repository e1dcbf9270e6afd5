use serde::{Deserialize, Serialize};

use super::defaults::default_true;

/// Reminder text configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
	/// Append the number of songs to reminder bodies
	#[serde(default = "default_true")]
	pub include_song_count: bool,
}

impl Default for NotificationsConfig {
	fn default() -> Self { Self { include_song_count: default_true() } }
}
