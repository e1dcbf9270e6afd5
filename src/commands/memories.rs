use anyhow::Result;
use music_memories::{DateFormat, IntervalLabeler, Library, LabelVariant, Memory, MemoryDateSpan, Reminder, utils::{parse_optional_date, rule, song_line}};

use super::Session;

/// Handles the list command - one line per memory with its info label
pub fn handle_list(session: &Session) -> Result<()> {
	let labeler = session.config.dates.labeler()?;
	let book = session.memories()?;
	if book.is_empty() {
		println!("No memories yet.");
		return Ok(());
	}
	for memory in book.iter() {
		println!("{}", list_line(memory, &labeler));
	}
	Ok(())
}

/// Handles the add command - creates a memory, optionally filled from the library
pub fn handle_add(
	session: &Session,
	title: String,
	start: Option<&str>,
	end: Option<&str>,
	description: Option<String>,
	auto: bool,
) -> Result<()> {
	let labeler = session.config.dates.labeler()?;
	let boundary = *labeler.formatter().boundary();
	let span = MemoryDateSpan::new(parse_optional_date(start, &boundary)?, parse_optional_date(end, &boundary)?);

	let mut memory = Memory::new(title, span);
	memory.description = description;
	memory.settings.update_automatically = auto;
	if auto && span.interval().is_some() {
		let added = memory.refresh_from(&session.library()?);
		tracing::info!(added, "filled new memory from library");
	}

	let mut book = session.memories()?;
	let line = list_line(&memory, &labeler);
	let id = book.add(memory);
	session.save_memories(&book)?;
	println!("Memory created with ID: {id}\n{line}");
	Ok(())
}

/// Handles the show command - displays a memory, its songs and reminder text
pub fn handle_show(session: &Session, id_or_title: &str) -> Result<()> {
	let labeler = session.config.dates.labeler()?;
	let book = session.memories()?;
	let memory = book.resolve(id_or_title)?;
	let library = match session.library() {
		Ok(library) => library,
		Err(err) => {
			tracing::warn!(error = %err, "showing memory without song details");
			Library::default()
		}
	};

	let reminder = Reminder::for_memory(memory, &labeler, session.config.notifications.include_song_count);
	let sep = rule();
	let dates = labeler.label_span(&memory.span, LabelVariant::Info);
	println!(
		"\n{sep}\nTitle: {}\nDates: {}\nAuto-update: {}\n{sep}",
		memory.title,
		if dates.is_empty() { "-" } else { dates.as_str() },
		if memory.settings.update_automatically { "on" } else { "off" },
	);
	if let Some(description) = &memory.description {
		println!("\n{description}");
	}

	let songs = memory.songs(&library);
	println!("\nSongs ({}):", memory.song_ids.len());
	for song in &songs {
		println!("  {}", song_line(song, labeler.formatter()));
	}
	let missing = memory.song_ids.len() - songs.len();
	if missing > 0 {
		println!("  ({missing} not found in the library)");
	}

	println!("\nReminder:\n  {}\n  {}\n", reminder.title, reminder.body);
	Ok(())
}

/// Handles the refresh command - appends newly matching songs to auto-updating memories
pub fn handle_refresh(session: &Session, id_or_title: Option<&str>) -> Result<()> {
	let library = session.library()?;
	let mut book = session.memories()?;

	let targets: Vec<_> = match id_or_title {
		Some(query) => vec![book.resolve(query)?.id],
		None => book.iter().filter(|m| m.settings.update_automatically).map(|m| m.id).collect(),
	};

	let mut total = 0;
	for id in targets {
		if let Some((title, added)) = book.update(id, |memory| (memory.title.clone(), memory.refresh_from(&library))) {
			if added > 0 {
				println!("{title}: added {added} song(s)");
			}
			total += added;
		}
	}

	if total == 0 {
		println!("Nothing new to add.");
	} else {
		session.save_memories(&book)?;
		println!("\nAdded {total} song(s)");
	}
	Ok(())
}

fn list_line<F: DateFormat>(memory: &Memory, labeler: &IntervalLabeler<F>) -> String {
	let dates = labeler.label_span(&memory.span, LabelVariant::Info);
	let auto = if memory.settings.update_automatically { " [auto]" } else { "" };
	let count = memory.song_ids.len();
	if dates.is_empty() {
		format!("{}\t{}{auto}\t{count} song(s)", memory.id, memory.title)
	} else {
		format!("{}\t{}{auto}\t{dates}\t{count} song(s)", memory.id, memory.title)
	}
}
