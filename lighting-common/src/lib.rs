// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and utilities for the lighting firmware publisher.
//!
//! Everything here is free of network access so the publish flow can be
//! exercised from tests:
//! - `counter`: the persisted version counter (read, increment, write back)
//! - `version`: the `major.minor.patch` firmware version type
//! - `upload`: the multipart form layout and upload outcome reporting
//! - `config`: default paths and server endpoints

pub mod config;
pub mod counter;
pub mod upload;
pub mod version;

// Re-export commonly used types
pub use counter::{current_version, next_version, read_counter, write_counter, CounterError};
pub use upload::{FirmwareForm, UploadOutcome};
pub use version::{FirmwareVersion, VersionParseError};
