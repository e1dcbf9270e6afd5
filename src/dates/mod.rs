//! Calendar-day handling and date labels.

mod boundary;
mod format;
mod interval;
mod label;

pub use boundary::DayBoundary;
pub use format::{DateFormat, LocaleFormatter, RANGE_DASH, parse_locale, patterns};
pub use interval::{DateInterval, MemoryDateSpan, SpanPresence};
pub use label::{DEFAULT_SEPARATOR, IntervalLabeler, LabelVariant};
