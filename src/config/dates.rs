use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dates::{DEFAULT_SEPARATOR, DayBoundary, IntervalLabeler, LocaleFormatter, parse_locale, patterns};

/// Date rendering and day-boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatesConfig {
	/// Locale for month names, e.g. "en_US" or "fr_FR"
	#[serde(default = "default_locale")]
	pub locale: String,

	/// Zone in which dates are cut into days: "local", "utc" or an offset like
	/// "+02:00"
	#[serde(default = "default_timezone")]
	pub timezone: String,

	/// strftime pattern for long-form dates
	#[serde(default = "default_long_format")]
	pub long_format: String,

	/// strftime pattern for medium-form dates
	#[serde(default = "default_medium_format")]
	pub medium_format: String,

	/// Text between the two dates of an info label
	#[serde(default = "default_separator")]
	pub separator: String,
}

fn default_locale() -> String { "en_US".to_string() }

fn default_timezone() -> String { "local".to_string() }

fn default_long_format() -> String { patterns::LONG.to_string() }

fn default_medium_format() -> String { patterns::MEDIUM.to_string() }

fn default_separator() -> String { DEFAULT_SEPARATOR.to_string() }

impl Default for DatesConfig {
	fn default() -> Self {
		Self {
			locale:        default_locale(),
			timezone:      default_timezone(),
			long_format:   default_long_format(),
			medium_format: default_medium_format(),
			separator:     default_separator(),
		}
	}
}

impl DatesConfig {
	pub fn boundary(&self) -> Result<DayBoundary> {
		self.timezone.parse::<DayBoundary>().with_context(|| format!("dates.timezone = \"{}\"", self.timezone))
	}

	pub fn formatter(&self) -> Result<LocaleFormatter> {
		let locale = parse_locale(&self.locale).with_context(|| format!("dates.locale = \"{}\"", self.locale))?;
		Ok(LocaleFormatter::new(locale, self.boundary()?).with_patterns(&self.long_format, &self.medium_format))
	}

	/// Builds the labeler described by this section.
	pub fn labeler(&self) -> Result<IntervalLabeler> {
		let formatter = self.formatter()?;
		let boundary = *formatter.boundary();
		Ok(IntervalLabeler::new(formatter, boundary).with_separator(&self.separator))
	}
}
