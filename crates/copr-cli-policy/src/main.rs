// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! CoPR policy diagnostics binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use copr_server_config::{LoggingConfig, ServerConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::{AbilitiesArgs, CheckArgs};

/// copr-policy - inspect the CoPR authorization policies
#[derive(Parser, Debug)]
#[command(name = "copr-policy", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long, env = "COPR_SERVER_CONFIG")]
	config: Option<PathBuf>,

	/// Output logs as JSON
	#[arg(long)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List the abilities each resource kind supports
	Abilities(AbilitiesArgs),
	/// List the seeded roles and their display names
	Roles,
	/// Run a synthetic request through the authorization gate
	Check(CheckArgs),
}

fn init_tracing(logging: &LoggingConfig, json: bool) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

	// Logs go to stderr so command output stays machine-readable.
	if json {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.init();
	}
}

fn load_config(path: Option<PathBuf>) -> Result<ServerConfig> {
	let config = match path {
		Some(path) => copr_server_config::load_config_with_file(path)?,
		None => copr_server_config::load_config()?,
	};
	Ok(config)
}

fn main() -> Result<()> {
	let args = Args::parse();

	let config = load_config(args.config)?;
	init_tracing(&config.logging, args.json_logs);

	let output = match args.command {
		Command::Abilities(cmd) => commands::abilities(&cmd)?,
		Command::Roles => commands::roles(&config),
		Command::Check(cmd) => commands::check(&cmd, &config)?,
	};

	println!("{output}");
	Ok(())
}
