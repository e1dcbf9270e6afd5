use anyhow::Result;
use music_memories::{DateInterval, LabelVariant, LocaleFormatter, Song, group_by_day, utils::{parse_date_arg, parse_optional_date, song_line}};

use super::Session;

/// Handles the suggest command - lists songs added during a span
pub fn handle_suggest(session: &Session, start: &str, end: &str, limit: Option<usize>, sections: bool) -> Result<()> {
	let formatter = session.config.dates.formatter()?;
	let boundary = *formatter.boundary();
	let interval = DateInterval::new(parse_date_arg(start, &boundary)?, parse_date_arg(end, &boundary)?);
	if interval.is_empty() {
		tracing::warn!(start, end, "start is not before end, nothing can match");
	}

	let library = session.library()?;
	let mut songs = interval.select(library.songs());
	tracing::debug!(selected = songs.len(), library = library.len(), "selected songs in span");

	let limit = limit.unwrap_or(session.config.library.suggestion_limit);
	if limit > 0 {
		songs.truncate(limit);
	}

	if songs.is_empty() {
		println!("No songs were added in that span.");
	} else if sections {
		print_sections(&songs, &formatter);
	} else {
		for song in songs {
			println!("{}", song_line(song, &formatter));
		}
	}
	Ok(())
}

/// Handles the label command - prints the label for a start/end pair
pub fn handle_label(session: &Session, start: Option<&str>, end: Option<&str>, notification: bool) -> Result<()> {
	let labeler = session.config.dates.labeler()?;
	let boundary = *labeler.formatter().boundary();
	let label = labeler.label_variant(
		parse_optional_date(start, &boundary)?,
		parse_optional_date(end, &boundary)?,
		LabelVariant::from_long_form(notification),
	);
	println!("{label}");
	Ok(())
}

/// Handles the sections command - shows the library grouped by day added
pub fn handle_sections(session: &Session) -> Result<()> {
	let formatter = session.config.dates.formatter()?;
	let library = session.library()?;
	if library.is_empty() {
		println!("The library is empty.");
		return Ok(());
	}
	let songs: Vec<&Song> = library.songs().iter().collect();
	print_sections(&songs, &formatter);
	Ok(())
}

fn print_sections(songs: &[&Song], formatter: &LocaleFormatter) {
	for line in section_lines(songs, formatter) {
		println!("{line}");
	}
}

fn section_lines(songs: &[&Song], formatter: &LocaleFormatter) -> Vec<String> {
	let mut lines = Vec::new();
	for section in group_by_day(songs.iter().copied(), formatter.boundary()) {
		if !lines.is_empty() {
			lines.push(String::new());
		}
		lines.push(format!("{} ({})", section.header(formatter), section.items.len()));
		lines.extend(section.items.iter().map(|song| format!("  {}", song_title(song))));
	}
	lines
}

fn song_title(song: &Song) -> String {
	if song.artist.is_empty() { song.title.clone() } else { format!("{} · {}", song.title, song.artist) }
}

#[cfg(test)]
mod tests {
	use chrono::{Locale, TimeZone, Utc};
	use music_memories::DayBoundary;

	use super::*;

	#[test]
	fn sections_print_headers_and_indented_songs() {
		let songs: Vec<Song> = [(1, 3, "Blue", "Joni Mitchell"), (2, 3, "River", ""), (3, 5, "Case of You", "")]
			.into_iter()
			.map(|(id, day, title, artist)| Song {
				persistent_id: id,
				title:         title.into(),
				artist:        artist.into(),
				album:         String::new(),
				date_added:    Utc.with_ymd_and_hms(2020, 3, day, 12, u32::try_from(id).unwrap(), 0).unwrap(),
				play_count:    0,
			})
			.collect();
		let refs: Vec<&Song> = songs.iter().collect();
		let formatter = LocaleFormatter::new(Locale::en_US, DayBoundary::utc());

		assert_eq!(section_lines(&refs, &formatter), vec![
			"Mar 3, 2020 (2)",
			"  Blue · Joni Mitchell",
			"  River",
			"",
			"Mar 5, 2020 (1)",
			"  Case of You",
		]);
	}
}
