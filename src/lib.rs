//! Music Memories: curate dated collections of songs from a music library.
//!
//! The library side holds the logic every surface shares: selecting songs
//! added inside a date range, bucketing songs by day, and turning a memory's
//! optional start and end dates into a label.

pub mod config;
pub mod dates;
pub mod error;
pub mod events;
pub mod library;
pub mod memory;
pub mod utils;

pub use config::Config;
pub use dates::{DateFormat, DateInterval, DayBoundary, IntervalLabeler, LabelVariant, LocaleFormatter, MemoryDateSpan};
pub use error::{Error, Result};
pub use library::{Library, Song, Timestamped, group_by_day, select_items_in_range};
pub use memory::{Memory, MemoryBook, MemorySettings, Reminder};
