//! Console formatting helpers.

use crate::{dates::DateFormat, library::Song};

/// One-line description of a song: "Blue · Joni Mitchell (Mar 5, 2020)".
pub fn song_line(song: &Song, formatter: &impl DateFormat) -> String {
	let added = formatter.medium(&song.date_added);
	if song.artist.is_empty() {
		format!("{} ({added})", song.title)
	} else {
		format!("{} · {} ({added})", song.title, song.artist)
	}
}

/// Horizontal rule used around detail views.
pub fn rule() -> String { "=".repeat(50) }
