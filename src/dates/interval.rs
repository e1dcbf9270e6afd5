use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::library::{Timestamped, select_items_in_range};

/// An ordered pair of timestamps bounding a query or display range.
///
/// `start <= end` is expected but not enforced. A reversed or zero-width
/// interval is still a valid query; it simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
	pub start: DateTime<Utc>,
	pub end:   DateTime<Utc>,
}

impl DateInterval {
	pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self { Self { start, end } }

	/// True when `start >= end`, so the open interval holds nothing.
	pub fn is_empty(&self) -> bool { self.start >= self.end }

	/// True when `dt` lies strictly between both bounds.
	pub fn contains(&self, dt: &DateTime<Utc>) -> bool { self.start < *dt && *dt < self.end }

	/// Selects the items strictly inside this interval, ascending by timestamp.
	pub fn select<I>(&self, items: I) -> Vec<I::Item>
	where
		I: IntoIterator,
		I::Item: Timestamped,
	{
		select_items_in_range(items, self.start, self.end)
	}
}

/// The optional start and end dates a user entered for a memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryDateSpan {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub start: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end:   Option<DateTime<Utc>>,
}

/// Which endpoints of a [`MemoryDateSpan`] are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanPresence {
	Neither,
	StartOnly(DateTime<Utc>),
	EndOnly(DateTime<Utc>),
	Both(DateInterval),
}

impl MemoryDateSpan {
	pub const fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self { Self { start, end } }

	pub const fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self { Self::new(Some(start), Some(end)) }

	pub fn presence(&self) -> SpanPresence {
		match (self.start, self.end) {
			(None, None) => SpanPresence::Neither,
			(Some(start), None) => SpanPresence::StartOnly(start),
			(None, Some(end)) => SpanPresence::EndOnly(end),
			(Some(start), Some(end)) => SpanPresence::Both(DateInterval::new(start, end)),
		}
	}

	/// The interval covered by the span, when both dates are known.
	pub fn interval(&self) -> Option<DateInterval> {
		match self.presence() {
			SpanPresence::Both(interval) => Some(interval),
			_ => None,
		}
	}

	pub const fn is_empty(&self) -> bool { self.start.is_none() && self.end.is_none() }
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;

	fn day(d: u32) -> DateTime<Utc> { Utc.with_ymd_and_hms(2020, 3, d, 12, 0, 0).unwrap() }

	#[test]
	fn presence_covers_all_shapes() {
		assert_eq!(MemoryDateSpan::default().presence(), SpanPresence::Neither);
		assert_eq!(MemoryDateSpan::new(Some(day(3)), None).presence(), SpanPresence::StartOnly(day(3)));
		assert_eq!(MemoryDateSpan::new(None, Some(day(4))).presence(), SpanPresence::EndOnly(day(4)));
		assert_eq!(
			MemoryDateSpan::between(day(3), day(4)).presence(),
			SpanPresence::Both(DateInterval::new(day(3), day(4)))
		);
	}

	#[test]
	fn interval_bounds_are_exclusive() {
		let interval = DateInterval::new(day(3), day(5));
		assert!(!interval.contains(&day(3)));
		assert!(interval.contains(&day(4)));
		assert!(!interval.contains(&day(5)));
	}

	#[test]
	fn reversed_interval_is_empty_not_an_error() {
		let interval = DateInterval::new(day(5), day(3));
		assert!(interval.is_empty());
		assert!(!interval.contains(&day(4)));
		assert!(DateInterval::new(day(3), day(3)).is_empty());
	}

	#[test]
	fn span_serializes_without_missing_dates() {
		let json = serde_json::to_string(&MemoryDateSpan::new(Some(day(3)), None)).unwrap();
		assert!(json.contains("start"));
		assert!(!json.contains("end"));
		let back: MemoryDateSpan = serde_json::from_str("{}").unwrap();
		assert!(back.is_empty());
	}
}
