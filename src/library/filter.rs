use chrono::{DateTime, Utc};

use super::Timestamped;

/// Returns the items whose timestamp lies strictly between `start` and `end`.
///
/// Both bounds are exclusive: an item stamped exactly at `start` or `end` is
/// left out. The result is sorted by ascending timestamp regardless of input
/// order, and equal timestamps keep their input order. When `start >= end`
/// nothing can qualify and the result is empty.
pub fn select_items_in_range<I>(items: I, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<I::Item>
where
	I: IntoIterator,
	I::Item: Timestamped,
{
	if start >= end {
		return Vec::new();
	}

	let mut selected: Vec<I::Item> = items
		.into_iter()
		.filter(|item| {
			let stamp = item.timestamp();
			start < stamp && stamp < end
		})
		.collect();
	selected.sort_by_key(|item| item.timestamp());
	selected
}
