use super::Memory;
use crate::dates::{DateFormat, IntervalLabeler, LabelVariant};

/// Text of a memory reminder. Scheduling and display happen elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
	pub title: String,
	pub body:  String,
}

impl Reminder {
	/// Builds the reminder for `memory`, labelling its span in long form.
	///
	/// With `include_song_count` the body ends with the number of songs.
	/// A memory without dates falls back to its description.
	pub fn for_memory<F: DateFormat>(memory: &Memory, labeler: &IntervalLabeler<F>, include_song_count: bool) -> Self {
		let mut parts = Vec::with_capacity(2);

		let label = labeler.label_span(&memory.span, LabelVariant::Notification);
		if !label.is_empty() {
			parts.push(label);
		} else if let Some(description) = memory.description.as_deref().filter(|d| !d.trim().is_empty()) {
			parts.push(description.trim().to_string());
		}

		if include_song_count {
			let count = memory.song_ids.len();
			parts.push(if count == 1 { "1 song".to_string() } else { format!("{count} songs") });
		}

		Self { title: memory.title.clone(), body: parts.join(" · ") }
	}
}

#[cfg(test)]
mod tests {
	use chrono::{Locale, TimeZone, Utc};

	use super::*;
	use crate::dates::{DayBoundary, MemoryDateSpan};

	fn labeler() -> IntervalLabeler { IntervalLabeler::for_locale(Locale::en_US, DayBoundary::utc()) }

	#[test]
	fn body_uses_the_long_form_range() {
		let span = MemoryDateSpan::between(
			Utc.with_ymd_and_hms(2020, 3, 3, 9, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2020, 3, 10, 9, 0, 0).unwrap(),
		);
		let mut memory = Memory::new("Spring break", span);
		memory.song_ids = vec![1, 2, 3];

		let reminder = Reminder::for_memory(&memory, &labeler(), true);
		assert_eq!(reminder.title, "Spring break");
		assert_eq!(reminder.body, "March 3 – 10, 2020 · 3 songs");
		assert_eq!(Reminder::for_memory(&memory, &labeler(), false).body, "March 3 – 10, 2020");
	}

	#[test]
	fn undated_memory_falls_back_to_description() {
		let mut memory = Memory::new("Mixtape", MemoryDateSpan::default());
		memory.description = Some("  for the car  ".into());
		memory.song_ids = vec![4];
		assert_eq!(Reminder::for_memory(&memory, &labeler(), true).body, "for the car · 1 song");
	}

	#[test]
	fn undated_memory_without_description_has_only_the_count() {
		let memory = Memory::new("Empty", MemoryDateSpan::default());
		assert_eq!(Reminder::for_memory(&memory, &labeler(), true).body, "0 songs");
		assert_eq!(Reminder::for_memory(&memory, &labeler(), false).body, "");
	}
}
