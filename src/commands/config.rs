use std::path::Path;

use anyhow::Result;
use music_memories::{Config, utils::confirm};

/// Handles the config command - generates or shows configuration
pub fn handle_config(config_path: &Path, show: bool) -> Result<()> {
	if show {
		let config = Config::load_from(config_path)?;
		let config_str = toml::to_string_pretty(&config)?;
		println!("Current configuration:\n");
		println!("{config_str}");
		println!("\nConfig file location: {}", config_path.display());
	} else {
		if config_path.exists() {
			println!("Config file already exists at: {}", config_path.display());
			if !confirm("Overwrite existing config?") {
				println!("Cancelled.");
				return Ok(());
			}
		}

		Config::default().save_to(config_path)?;
		println!("Generated default configuration file at: {}", config_path.display());
		println!("\nYou can edit this file to customize how dates are labelled.");
	}
	Ok(())
}
