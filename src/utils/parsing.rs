//! Parsing of user-supplied values.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{dates::DayBoundary, error::{Error, Result}};

/// Date format accepted for day-only arguments: "2020-03-03"
pub const DATE_ONLY: &str = "%Y-%m-%d";

/// Parses a date argument.
///
/// Accepts a full RFC 3339 timestamp, or a day in `YYYY-MM-DD` form, which
/// resolves to the first instant of that day on `boundary`.
pub fn parse_date_arg(input: &str, boundary: &DayBoundary) -> Result<DateTime<Utc>> {
	let input = input.trim();
	if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
		return Ok(dt.with_timezone(&Utc));
	}

	NaiveDate::parse_from_str(input, DATE_ONLY)
		.ok()
		.and_then(|day| boundary.start_of_day(day))
		.ok_or_else(|| Error::InvalidDate(input.to_string()))
}

/// Parses an optional date argument.
pub fn parse_optional_date(input: Option<&str>, boundary: &DayBoundary) -> Result<Option<DateTime<Utc>>> {
	input.map(|s| parse_date_arg(s, boundary)).transpose()
}
