// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations.

use std::cmp::Ordering;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crc::{Crc, CRC_32_ISO_HDLC};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use lighting_common::{current_version, next_version, FirmwareForm};

use crate::transport::Transport;

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Consume the next version number and upload the firmware under it.
///
/// The counter is written back before the firmware is even looked at, so a
/// missing build or a failed upload still uses up a version number. Upload
/// failures are reported on stdout and only become an error with
/// `fail_on_error`.
pub fn publish(
    transport: &Transport,
    version_file: &Path,
    firmware: &Path,
    fail_on_error: bool,
) -> Result<()> {
    let version = next_version(version_file)?;
    println!("New Version: {}", version);

    if !firmware.exists() {
        bail!(
            "Firmware not found at {}\nDid you forget to build the project?",
            firmware.display()
        );
    }

    println!("Uploading version {} from {}...", version, firmware.display());

    let data =
        fs::read(firmware).with_context(|| format!("Failed to read {}", firmware.display()))?;
    println!(
        "Firmware: {} bytes, CRC32: 0x{:08x}",
        data.len(),
        CRC32.checksum(&data)
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    spinner.set_message(format!("POST {}", transport.upload_url()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = transport.upload(FirmwareForm::new(data, version));
    spinner.finish_and_clear();
    debug!("upload outcome: {:?}", outcome);

    let mut stdout = std::io::stdout().lock();
    outcome.write_report(&mut stdout)?;
    stdout.flush()?;

    if fail_on_error && !outcome.is_success() {
        bail!("Upload of version {} did not succeed", version);
    }

    Ok(())
}

/// Show the version the counter file currently represents.
pub fn current(version_file: &Path) -> Result<()> {
    let version = current_version(version_file)?;
    println!("Current version: {}", version);
    Ok(())
}

/// Compare the local counter with the server's latest published version.
pub fn latest(transport: &Transport, version_file: &Path) -> Result<()> {
    let local = current_version(version_file)?;
    let remote = transport.latest_version()?;

    println!("Local version:  {}", local);
    println!("Server version: {}", remote);

    match local.cmp(&remote) {
        Ordering::Equal => println!("In sync."),
        Ordering::Less => println!("Server is ahead of the local counter."),
        Ordering::Greater => println!("Local counter is ahead of the server (unpublished build?)."),
    }

    Ok(())
}
