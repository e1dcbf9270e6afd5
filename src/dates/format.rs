//! Locale-aware rendering of single dates and date ranges.

use chrono::{DateTime, Datelike, FixedOffset, Locale, NaiveDate, NaiveTime, Utc};

use super::DayBoundary;
use crate::error::{Error, Result};

/// Pattern constants for consistent formatting across the application.
pub mod patterns {
	/// Long form: "March 3, 2020"
	pub const LONG: &str = "%B %-d, %Y";

	/// Medium form: "Mar 3, 2020"
	pub const MEDIUM: &str = "%b %-d, %Y";

	/// Month and day, used for the leading half of a same-year range: "March 3"
	pub const MONTH_DAY: &str = "%B %-d";

	/// Day of month alone: "10"
	pub const DAY: &str = "%-d";

	/// Year alone: "2020"
	pub const YEAR: &str = "%Y";
}

/// Dash placed between the two halves of a long-form range.
pub const RANGE_DASH: &str = " – ";

/// The date rendering capability the labeler and section headers rely on.
pub trait DateFormat {
	/// Long-form single date, e.g. "March 3, 2020".
	fn long(&self, dt: &DateTime<Utc>) -> String;

	/// Medium-form single date, e.g. "Mar 3, 2020".
	fn medium(&self, dt: &DateTime<Utc>) -> String;

	/// Medium-form calendar day, independent of any time zone.
	fn medium_day(&self, day: NaiveDate) -> String;

	/// Long-form range without a time component, e.g. "March 3 – 10, 2020".
	fn interval(&self, start: &DateTime<Utc>, end: &DateTime<Utc>) -> String;
}

/// [`DateFormat`] backed by chrono's localized month and weekday names.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
	locale:         Locale,
	boundary:       DayBoundary,
	long_pattern:   String,
	medium_pattern: String,
}

impl LocaleFormatter {
	pub fn new(locale: Locale, boundary: DayBoundary) -> Self {
		Self {
			locale,
			boundary,
			long_pattern: patterns::LONG.to_string(),
			medium_pattern: patterns::MEDIUM.to_string(),
		}
	}

	/// Overrides the long and medium single-date patterns.
	pub fn with_patterns(mut self, long: impl Into<String>, medium: impl Into<String>) -> Self {
		self.long_pattern = long.into();
		self.medium_pattern = medium.into();
		self
	}

	pub const fn boundary(&self) -> &DayBoundary { &self.boundary }

	fn render(&self, dt: &DateTime<FixedOffset>, pattern: &str) -> String {
		dt.format_localized(pattern, self.locale).to_string()
	}
}

impl Default for LocaleFormatter {
	fn default() -> Self { Self::new(Locale::en_US, DayBoundary::Local) }
}

impl DateFormat for LocaleFormatter {
	fn long(&self, dt: &DateTime<Utc>) -> String { self.render(&self.boundary.localize(dt), &self.long_pattern) }

	fn medium(&self, dt: &DateTime<Utc>) -> String { self.render(&self.boundary.localize(dt), &self.medium_pattern) }

	fn medium_day(&self, day: NaiveDate) -> String {
		self.render(&day.and_time(NaiveTime::MIN).and_utc().fixed_offset(), &self.medium_pattern)
	}

	/// Collapses shared month and year only for the default long pattern. A
	/// custom pattern renders both ends in full.
	fn interval(&self, start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
		let (start, end) = (self.boundary.localize(start), self.boundary.localize(end));

		if start.year() != end.year() || self.long_pattern != patterns::LONG {
			return format!(
				"{}{RANGE_DASH}{}",
				self.render(&start, &self.long_pattern),
				self.render(&end, &self.long_pattern)
			);
		}

		let tail = if start.month() == end.month() { patterns::DAY } else { patterns::MONTH_DAY };
		format!(
			"{}{RANGE_DASH}{}, {}",
			self.render(&start, patterns::MONTH_DAY),
			self.render(&end, tail),
			self.render(&start, patterns::YEAR)
		)
	}
}

/// Parses a POSIX-style locale name such as `en_US` or `fr_FR`.
pub fn parse_locale(name: &str) -> Result<Locale> {
	let normalized = name.trim().split('.').next().unwrap_or_default().replace('-', "_");
	Locale::try_from(normalized.as_str()).map_err(|_| Error::UnknownLocale(name.to_string()))
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;

	fn formatter() -> LocaleFormatter { LocaleFormatter::new(Locale::en_US, DayBoundary::utc()) }

	fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> { Utc.with_ymd_and_hms(y, m, d, 15, 30, 0).unwrap() }

	#[test]
	fn single_dates_use_long_and_medium_forms() {
		let f = formatter();
		assert_eq!(f.long(&at(2020, 3, 3)), "March 3, 2020");
		assert_eq!(f.medium(&at(2020, 3, 3)), "Mar 3, 2020");
	}

	#[test]
	fn interval_collapses_shared_month_and_year() {
		let f = formatter();
		assert_eq!(f.interval(&at(2020, 3, 3), &at(2020, 3, 10)), "March 3 – 10, 2020");
		assert_eq!(f.interval(&at(2020, 3, 3), &at(2020, 4, 2)), "March 3 – April 2, 2020");
		assert_eq!(f.interval(&at(2019, 12, 30), &at(2020, 1, 2)), "December 30, 2019 – January 2, 2020");
	}

	#[test]
	fn dates_render_in_the_boundary_zone() {
		let tokyo = DayBoundary::Fixed(FixedOffset::east_opt(9 * 3600).unwrap());
		let f = LocaleFormatter::new(Locale::en_US, tokyo);
		// 20:00 UTC is already the next morning in Tokyo
		let late = Utc.with_ymd_and_hms(2020, 3, 3, 20, 0, 0).unwrap();
		assert_eq!(f.long(&late), "March 4, 2020");
	}

	#[test]
	fn custom_patterns_override_defaults() {
		let f = formatter().with_patterns("%Y-%m-%d", "%d/%m");
		assert_eq!(f.long(&at(2020, 3, 3)), "2020-03-03");
		assert_eq!(f.medium(&at(2020, 3, 3)), "03/03");
	}

	#[test]
	fn custom_long_pattern_shapes_every_range() {
		let f = formatter().with_patterns("%Y-%m-%d", patterns::MEDIUM);
		assert_eq!(f.interval(&at(2020, 3, 3), &at(2020, 3, 10)), "2020-03-03 – 2020-03-10");
		assert_eq!(f.interval(&at(2020, 3, 3), &at(2020, 4, 2)), "2020-03-03 – 2020-04-02");
		assert_eq!(f.interval(&at(2020, 3, 3), &at(2021, 1, 2)), "2020-03-03 – 2021-01-02");

		let french =
			LocaleFormatter::new(parse_locale("fr_FR").unwrap(), DayBoundary::utc()).with_patterns("%-d %B %Y", "%-d %b %Y");
		let range = french.interval(&at(2020, 3, 3), &at(2020, 3, 10));
		assert_eq!(range, format!("{}{RANGE_DASH}{}", french.long(&at(2020, 3, 3)), french.long(&at(2020, 3, 10))));
		assert!(range.starts_with("3 mars 2020"));
	}

	#[test]
	fn medium_day_ignores_the_boundary_zone() {
		let kiribati = DayBoundary::Fixed(FixedOffset::east_opt(14 * 3600).unwrap());
		let f = LocaleFormatter::new(Locale::en_US, kiribati);
		assert_eq!(f.medium_day(NaiveDate::from_ymd_opt(2020, 3, 3).unwrap()), "Mar 3, 2020");
	}

	#[test]
	fn month_names_follow_the_locale() {
		let f = LocaleFormatter::new(parse_locale("fr_FR").unwrap(), DayBoundary::utc());
		assert!(f.long(&at(2020, 3, 3)).contains("mars"));
	}

	#[test]
	fn locale_names_are_normalized() {
		assert_eq!(parse_locale("en-US").unwrap(), Locale::en_US);
		assert_eq!(parse_locale("en_US.UTF-8").unwrap(), Locale::en_US);
		assert!(matches!(parse_locale("xx_YY"), Err(Error::UnknownLocale(_))));
	}
}
