// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use lighting_common::config;

use crate::commands;
use crate::transport::Transport;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "lighting-upload")]
#[command(about = "Publish firmware builds to the lighting firmware server")]
pub struct Cli {
    /// Version counter file
    #[arg(long, value_name = "FILE", default_value = config::VERSION_FILE, global = true)]
    pub version_file: PathBuf,

    /// Firmware binary to upload
    #[arg(short, long, value_name = "FILE", default_value = config::FIRMWARE_PATH, global = true)]
    pub firmware: PathBuf,

    /// Firmware server base URL
    #[arg(short, long, value_name = "URL", default_value = config::SERVER_URL, global = true)]
    pub server: String,

    /// Don't ask the server to overwrite an existing upload of this version
    #[arg(long, global = true)]
    pub no_force: bool,

    /// Exit with an error when the upload is rejected or cannot be sent
    #[arg(long, global = true)]
    pub fail_on_error: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Increment the version counter and upload the firmware (default)
    Publish,

    /// Show the version the counter file currently represents
    Current,

    /// Compare the local version with the latest one on the server
    Latest,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Publish) {
        Commands::Publish => {
            let transport = Transport::new(&cli.server, !cli.no_force)?;
            commands::publish(
                &transport,
                &cli.version_file,
                &cli.firmware,
                cli.fail_on_error,
            )
        }
        Commands::Current => commands::current(&cli.version_file),
        Commands::Latest => {
            let transport = Transport::new(&cli.server, !cli.no_force)?;
            commands::latest(&transport, &cli.version_file)
        }
    }
}
