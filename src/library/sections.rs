use chrono::NaiveDate;

use super::Timestamped;
use crate::dates::{DateFormat, DayBoundary};

/// Items sharing one calendar day, as shown under a section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection<T> {
	pub day:   NaiveDate,
	pub items: Vec<T>,
}

impl<T> DaySection<T> {
	/// Medium-form date of the section's day.
	pub fn header(&self, formatter: &impl DateFormat) -> String { formatter.medium_day(self.day) }
}

/// Buckets items by the day their timestamp falls on in `boundary`.
///
/// Sections come out in ascending day order, items within a section in
/// ascending timestamp order. Days without items get no section.
pub fn group_by_day<I>(items: I, boundary: &DayBoundary) -> Vec<DaySection<I::Item>>
where
	I: IntoIterator,
	I::Item: Timestamped,
{
	let mut keyed: Vec<(NaiveDate, I::Item)> = items.into_iter().map(|item| (boundary.day_of(&item.timestamp()), item)).collect();
	keyed.sort_by_key(|(_, item)| item.timestamp());

	let mut sections: Vec<DaySection<I::Item>> = Vec::new();
	for (day, item) in keyed {
		match sections.last_mut() {
			Some(section) if section.day == day => section.items.push(item),
			_ => sections.push(DaySection { day, items: vec![item] }),
		}
	}
	sections
}
