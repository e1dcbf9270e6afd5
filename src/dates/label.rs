//! Human-readable labels for a memory's optional start and end dates.

use chrono::{DateTime, Locale, Utc};

use super::{DateFormat, DayBoundary, LocaleFormatter, MemoryDateSpan, SpanPresence};

/// Glyph placed between the two medium-form dates of an info label.
pub const DEFAULT_SEPARATOR: &str = " • ";

/// How a two-date range is rendered once it does not collapse to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelVariant {
	/// Two medium-form dates joined by the separator: "Mar 3, 2020 • Mar 10, 2020".
	#[default]
	Info,
	/// The locale interval form used in reminder bodies: "March 3 – 10, 2020".
	Notification,
}

impl LabelVariant {
	pub const fn from_long_form(long_form: bool) -> Self { if long_form { Self::Notification } else { Self::Info } }
}

/// Produces a single label from an optional start and end date.
///
/// - neither date: the empty string
/// - one date: that date in long form
/// - both on the same day (in the day boundary's zone): `start` in long form
/// - otherwise: a range, shaped by [`LabelVariant`]
#[derive(Debug, Clone)]
pub struct IntervalLabeler<F = LocaleFormatter> {
	formatter: F,
	boundary:  DayBoundary,
	separator: String,
}

impl<F: DateFormat> IntervalLabeler<F> {
	/// `boundary` must be the zone `formatter` renders in, so that a collapsed
	/// range and its rendered date agree on the day.
	pub fn new(formatter: F, boundary: DayBoundary) -> Self {
		Self { formatter, boundary, separator: DEFAULT_SEPARATOR.to_string() }
	}

	pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	pub const fn formatter(&self) -> &F { &self.formatter }

	pub fn label(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> String {
		self.label_variant(start, end, LabelVariant::Info)
	}

	pub fn label_long_form(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>, long_form: bool) -> String {
		self.label_variant(start, end, LabelVariant::from_long_form(long_form))
	}

	pub fn label_variant(
		&self,
		start: Option<DateTime<Utc>>,
		end: Option<DateTime<Utc>>,
		variant: LabelVariant,
	) -> String {
		self.label_span(&MemoryDateSpan::new(start, end), variant)
	}

	pub fn label_span(&self, span: &MemoryDateSpan, variant: LabelVariant) -> String {
		match span.presence() {
			SpanPresence::Neither => String::new(),
			SpanPresence::StartOnly(date) | SpanPresence::EndOnly(date) => self.formatter.long(&date),
			SpanPresence::Both(interval) if self.boundary.same_day(&interval.start, &interval.end) => {
				self.formatter.long(&interval.start)
			}
			SpanPresence::Both(interval) => match variant {
				LabelVariant::Info => format!(
					"{}{}{}",
					self.formatter.medium(&interval.start),
					self.separator,
					self.formatter.medium(&interval.end)
				),
				LabelVariant::Notification => self.formatter.interval(&interval.start, &interval.end),
			},
		}
	}
}

impl IntervalLabeler<LocaleFormatter> {
	/// Builds a labeler whose formatter and day keys share one boundary.
	pub fn for_locale(locale: Locale, boundary: DayBoundary) -> Self {
		Self::new(LocaleFormatter::new(locale, boundary), boundary)
	}
}

impl Default for IntervalLabeler<LocaleFormatter> {
	fn default() -> Self { Self::for_locale(Locale::en_US, DayBoundary::Local) }
}

#[cfg(test)]
mod tests {
	use chrono::{FixedOffset, TimeZone};

	use super::*;

	fn labeler() -> IntervalLabeler { IntervalLabeler::for_locale(Locale::en_US, DayBoundary::utc()) }

	fn at(d: u32, h: u32) -> DateTime<Utc> { Utc.with_ymd_and_hms(2020, 3, d, h, 0, 0).unwrap() }

	#[test]
	fn no_dates_gives_empty_label() {
		assert_eq!(labeler().label(None, None), "");
		assert_eq!(labeler().label_variant(None, None, LabelVariant::Notification), "");
	}

	#[test]
	fn a_single_date_uses_long_form() {
		assert_eq!(labeler().label(Some(at(3, 9)), None), "March 3, 2020");
		assert_eq!(labeler().label(None, Some(at(10, 9))), "March 10, 2020");
		assert_eq!(labeler().label_variant(Some(at(3, 9)), None, LabelVariant::Notification), "March 3, 2020");
	}

	#[test]
	fn same_day_collapses_to_start() {
		assert_eq!(labeler().label(Some(at(3, 1)), Some(at(3, 23))), "March 3, 2020");
		assert_eq!(labeler().label_long_form(Some(at(3, 1)), Some(at(3, 23)), true), "March 3, 2020");
	}

	#[test]
	fn distinct_days_form_a_range() {
		assert_eq!(labeler().label(Some(at(3, 9)), Some(at(10, 9))), "Mar 3, 2020 • Mar 10, 2020");
		assert_eq!(labeler().label_long_form(Some(at(3, 9)), Some(at(10, 9)), true), "March 3 – 10, 2020");
	}

	#[test]
	fn separator_is_configurable() {
		let labeler = labeler().with_separator(" to ");
		assert_eq!(labeler.label(Some(at(3, 9)), Some(at(4, 9))), "Mar 3, 2020 to Mar 4, 2020");
	}

	#[test]
	fn collapse_uses_the_boundary_day_not_the_utc_day() {
		let berlin = DayBoundary::Fixed(FixedOffset::east_opt(3600).unwrap());
		let labeler = IntervalLabeler::for_locale(Locale::en_US, berlin);
		// 23:30 local on the 3rd and 00:30 local on the 4th
		let before_midnight = Utc.with_ymd_and_hms(2020, 3, 3, 22, 30, 0).unwrap();
		let after_midnight = Utc.with_ymd_and_hms(2020, 3, 3, 23, 30, 0).unwrap();
		assert_eq!(labeler.label(Some(before_midnight), Some(after_midnight)), "Mar 3, 2020 • Mar 4, 2020");

		// 00:00:00 and 23:59:59 local on the 4th
		let first = Utc.with_ymd_and_hms(2020, 3, 3, 23, 0, 0).unwrap();
		let last = Utc.with_ymd_and_hms(2020, 3, 4, 22, 59, 59).unwrap();
		assert_eq!(labeler.label(Some(first), Some(last)), "March 4, 2020");
	}

	#[test]
	fn labels_are_stable_across_calls() {
		let labeler = labeler();
		let first = labeler.label(Some(at(3, 9)), Some(at(10, 9)));
		assert_eq!(first, labeler.label(Some(at(3, 9)), Some(at(10, 9))));
	}
}
