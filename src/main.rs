mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use commands::{Session, handle_command, handle_config};
use music_memories::Config;
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter(level: &str) -> Result<EnvFilter> {
	EnvFilter::try_new(level).with_context(|| format!("invalid log filter {level:?}"))
}

fn init_tracing(level: &str) -> Result<()> {
	let env_filter = env_filter(level)?;
	fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow::anyhow!(err))
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(&cli.log_level).with_context(|| format!("initialising logging at level {}", cli.log_level))?;

	let config_path = Config::get_config_path()?;
	if let Commands::Config { show } = cli.command {
		return handle_config(&config_path, show);
	}

	let config = Config::load_from(&config_path).context("Failed to load configuration")?;
	tracing::debug!(path = %config_path.display(), "configuration loaded");

	let session = Session::new(config, cli.library, cli.memories)?;
	handle_command(&session, cli.command)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_filter_is_validated() {
		assert!(env_filter("warn").is_ok());
		assert!(env_filter("music_memories=debug,info").is_ok());
		assert!(env_filter("music_memories=loudest").is_err());
	}
}
