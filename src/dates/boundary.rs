//! Day boundaries used to decide which calendar day a timestamp belongs to.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

use crate::error::{Error, Result};

/// The time zone in which timestamps are truncated to calendar days.
///
/// Two timestamps fall on the same day when their start-of-day truncations in
/// this zone are equal. There is no shift to the previous day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
	/// The system's local time zone, including its DST rules.
	#[default]
	Local,
	/// A fixed offset from UTC.
	Fixed(FixedOffset),
}

impl DayBoundary {
	pub fn utc() -> Self { Self::Fixed(Utc.fix()) }

	/// Converts a UTC timestamp into wall-clock time on this boundary.
	pub fn localize(&self, dt: &DateTime<Utc>) -> DateTime<FixedOffset> {
		match self {
			Self::Local => dt.with_timezone(&Local).fixed_offset(),
			Self::Fixed(offset) => dt.with_timezone(offset),
		}
	}

	/// Returns the calendar day `dt` falls on.
	pub fn day_of(&self, dt: &DateTime<Utc>) -> NaiveDate { self.localize(dt).date_naive() }

	/// Returns the first instant of `day`.
	///
	/// When local midnight does not exist (a DST gap at midnight) the earliest
	/// valid instant of that day is used.
	pub fn start_of_day(&self, day: NaiveDate) -> Option<DateTime<Utc>> {
		let midnight = day.and_time(NaiveTime::MIN);
		match self {
			Self::Local => (0..=3)
				.find_map(|hours| Local.from_local_datetime(&(midnight + Duration::hours(hours))).earliest())
				.map(|dt| dt.with_timezone(&Utc)),
			Self::Fixed(offset) => offset.from_local_datetime(&midnight).single().map(|dt| dt.with_timezone(&Utc)),
		}
	}

	/// True when both timestamps fall on the same calendar day.
	pub fn same_day(&self, a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool { self.day_of(a) == self.day_of(b) }
}

impl FromStr for DayBoundary {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let trimmed = s.trim();
		match trimmed.to_lowercase().as_str() {
			"local" => Ok(Self::Local),
			"utc" | "z" => Ok(Self::utc()),
			_ => trimmed
				.parse::<FixedOffset>()
				.map(Self::Fixed)
				.map_err(|_| Error::InvalidTimezone(s.to_string())),
		}
	}
}

impl fmt::Display for DayBoundary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Local => f.write_str("local"),
			Self::Fixed(offset) => write!(f, "{offset}"),
		}
	}
}
