// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Persisted version counter.
//!
//! The counter is a single non-negative integer stored as plain text. Each
//! publish consumes one value: [`next_version`] writes the incremented value
//! back before returning, whether or not the upload that follows succeeds.
//! There is no locking; two concurrent runs can read the same value.

use core::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::version::FirmwareVersion;

/// Errors from reading or updating the counter file.
#[derive(Debug)]
pub enum CounterError {
    /// The counter file does not exist.
    NotFound(PathBuf),
    /// The counter file does not hold a non-negative integer.
    Invalid(PathBuf),
    /// The counter is already at its maximum value.
    Overflow(PathBuf),
    /// Any other filesystem error.
    Io(PathBuf, io::Error),
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "{} not found!", path.display()),
            Self::Invalid(path) => write!(f, "Invalid version number in {}", path.display()),
            Self::Overflow(path) => {
                write!(f, "Version counter in {} cannot be incremented", path.display())
            }
            Self::Io(path, e) => write!(f, "Failed to access {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for CounterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Read the counter value without modifying the file.
pub fn read_counter(path: &Path) -> Result<u64, CounterError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CounterError::NotFound(path.to_path_buf()))
        }
        // Not UTF-8, so certainly not a number
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(CounterError::Invalid(path.to_path_buf()))
        }
        Err(e) => return Err(CounterError::Io(path.to_path_buf(), e)),
    };

    contents
        .trim()
        .parse::<u64>()
        .map_err(|_| CounterError::Invalid(path.to_path_buf()))
}

/// Overwrite the counter file with `value` as bare decimal digits.
pub fn write_counter(path: &Path, value: u64) -> Result<(), CounterError> {
    fs::write(path, value.to_string()).map_err(|e| CounterError::Io(path.to_path_buf(), e))
}

/// Version the counter file currently represents.
pub fn current_version(path: &Path) -> Result<FirmwareVersion, CounterError> {
    read_counter(path).map(FirmwareVersion::from_counter)
}

/// Increment the counter, persist it, and return the version it names.
pub fn next_version(path: &Path) -> Result<FirmwareVersion, CounterError> {
    let current = read_counter(path)?;
    let next = current
        .checked_add(1)
        .ok_or_else(|| CounterError::Overflow(path.to_path_buf()))?;

    write_counter(path, next)?;
    debug!("{}: {} -> {}", path.display(), current, next);

    Ok(FirmwareVersion::from_counter(next))
}
