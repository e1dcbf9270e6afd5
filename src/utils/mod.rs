//! Shared helpers for the command-line front end.

mod formatting;
mod interaction;
mod parsing;

pub use formatting::{rule, song_line};
pub use interaction::confirm;
pub use parsing::{DATE_ONLY, parse_date_arg, parse_optional_date};
