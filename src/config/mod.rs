mod dates;
mod defaults;
mod library;
mod notifications;

use std::{env, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
pub use dates::DatesConfig;
pub use library::LibraryConfig;
pub use notifications::NotificationsConfig;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "music-memories";

/// Configuration for the application.
///
/// Loaded once at startup and passed to the components that need it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
	#[serde(default)]
	pub dates:         DatesConfig,
	#[serde(default)]
	pub library:       LibraryConfig,
	#[serde(default)]
	pub notifications: NotificationsConfig,
}

impl Config {
	/// Loads configuration from `path`, writing the defaults there if the file
	/// does not exist yet.
	pub fn load_from(path: &Path) -> Result<Self> {
		if !path.exists() {
			tracing::info!(path = %path.display(), "writing default configuration");
			let config = Self::default();
			config.save_to(path)?;
			return Ok(config);
		}

		let config_str = fs::read_to_string(path).context("Failed to read config file")?;

		let config: Self = toml::from_str(&config_str).context("Failed to parse config file")?;
		config.validate()?;
		Ok(config)
	}

	/// Saves the configuration to `path` with inline comments.
	pub fn save_to(&self, path: &Path) -> Result<()> {
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).context("Failed to create config directory")?;
		}

		fs::write(path, self.to_toml_with_comments()).context("Failed to write config file")?;

		Ok(())
	}

	/// Generates TOML string with helpful inline comments for each field
	fn to_toml_with_comments(&self) -> String {
		format!(
			r#"# music-memories configuration file
# Edit this file to customize how dates are labelled and where data lives

[dates]
# Locale for month names, e.g. "en_US" or "fr_FR"
locale = {locale}
# Zone in which dates are cut into days: "local", "utc" or an offset like "+02:00"
timezone = {timezone}
# strftime patterns for single dates
long_format = {long_format}
medium_format = {medium_format}
# Text between the two dates of an info label
separator = {separator}

[library]
{library_path}{memories_path}# Maximum number of songs `suggest` prints (0 = no limit)
suggestion_limit = {suggestion_limit}

[notifications]
# Append the number of songs to reminder bodies
include_song_count = {include_song_count}
"#,
			locale = toml_str(&self.dates.locale),
			timezone = toml_str(&self.dates.timezone),
			long_format = toml_str(&self.dates.long_format),
			medium_format = toml_str(&self.dates.medium_format),
			separator = toml_str(&self.dates.separator),
			library_path = optional_path("library_path", self.library.library_path.as_deref(), "~/Music/library.json"),
			memories_path = optional_path("memories_path", self.library.memories_path.as_deref(), "~/memories.json"),
			suggestion_limit = self.library.suggestion_limit,
			include_song_count = self.notifications.include_song_count,
		)
	}

	/// Returns the platform-specific configuration file path following XDG spec.
	/// Priority order:
	/// 1. $XDG_CONFIG_HOME/music-memories/config.toml
	/// 2. ~/.config/music-memories/config.toml (Unix)
	/// 3. ~/Library/Application Support/music-memories/config.toml (macOS fallback)
	/// 4. %APPDATA%\music-memories\config.toml (Windows)
	pub fn get_config_path() -> Result<PathBuf> {
		let config_dir = if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
			PathBuf::from(xdg_config)
		} else if cfg!(target_os = "macos") {
			let home = dirs::home_dir().context("Failed to get home directory")?;
			let xdg_path = home.join(".config");
			if xdg_path.exists() {
				xdg_path
			} else {
				dirs::config_dir().unwrap_or_else(|| home.join("Library/Application Support"))
			}
		} else {
			dirs::config_dir().context("Failed to get config directory")?
		};

		Ok(config_dir.join(APP_DIR).join("config.toml"))
	}

	/// Returns the platform data directory, creating it if needed.
	pub fn data_dir() -> Result<PathBuf> {
		let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
		path.push(APP_DIR);
		fs::create_dir_all(&path).context("Failed to create data directory")?;
		Ok(path)
	}

	/// Library export path, preferring the configured one.
	pub fn library_path(&self) -> Result<PathBuf> {
		match &self.library.library_path {
			Some(path) => Ok(path.clone()),
			None => Ok(Self::data_dir()?.join("library.json")),
		}
	}

	/// Memories file path, preferring the configured one.
	pub fn memories_path(&self) -> Result<PathBuf> {
		match &self.library.memories_path {
			Some(path) => Ok(path.clone()),
			None => Ok(Self::data_dir()?.join("memories.json")),
		}
	}

	/// Validates the configuration values.
	pub fn validate(&self) -> Result<()> {
		self.dates.labeler().context("Invalid [dates] configuration")?;

		if self.dates.long_format.trim().is_empty() || self.dates.medium_format.trim().is_empty() {
			anyhow::bail!("dates.long_format and dates.medium_format must not be empty");
		}

		Ok(())
	}
}

/// Quotes a string as a TOML basic string.
fn toml_str(value: &str) -> String { toml::Value::String(value.to_string()).to_string() }

fn optional_path(key: &str, path: Option<&Path>, example: &str) -> String {
	match path {
		Some(path) => format!("{key} = {}\n", toml_str(&path.to_string_lossy())),
		None => format!("# {key} = \"{example}\"\n"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_load_writes_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("music-memories").join("config.toml");
		let config = Config::load_from(&path).unwrap();
		assert!(path.exists());
		assert_eq!(config.dates.locale, "en_US");
		assert_eq!(config.library.suggestion_limit, 50);
	}

	#[test]
	fn commented_defaults_parse_back() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		let mut config = Config::default();
		config.dates.timezone = "+02:00".into();
		config.dates.separator = " \"•\" ".into();
		config.library.library_path = Some(PathBuf::from("/music/library.json"));
		config.save_to(&path).unwrap();

		let loaded = Config::load_from(&path).unwrap();
		assert_eq!(loaded.dates.timezone, "+02:00");
		assert_eq!(loaded.dates.separator, " \"•\" ");
		assert_eq!(loaded.library.library_path, Some(PathBuf::from("/music/library.json")));
		assert!(loaded.library.memories_path.is_none());
		assert!(loaded.notifications.include_song_count);
	}

	#[test]
	fn missing_sections_fall_back_to_defaults() {
		let config: Config = toml::from_str("[dates]\nlocale = \"fr_FR\"\n").unwrap();
		assert_eq!(config.dates.locale, "fr_FR");
		assert_eq!(config.dates.timezone, "local");
		assert!(config.validate().is_ok());
	}

	#[test]
	fn validate_rejects_bad_locale_and_timezone() {
		let mut config = Config::default();
		config.dates.locale = "xx_YY".into();
		assert!(config.validate().is_err());

		let mut config = Config::default();
		config.dates.timezone = "somewhere".into();
		assert!(config.validate().is_err());

		let mut config = Config::default();
		config.dates.long_format = " ".into();
		assert!(config.validate().is_err());
	}
}
