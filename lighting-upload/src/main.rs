// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Firmware publish tool for the lighting firmware server.
//!
//! Usage:
//!   lighting-upload                 increment version.txt and upload the build
//!   lighting-upload current         show the version version.txt represents
//!   lighting-upload latest          compare against the server's latest version

mod cli;
mod commands;
mod transport;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
