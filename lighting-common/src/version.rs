// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Firmware version type.

use core::fmt;
use core::str::FromStr;

use serde::Deserialize;

use crate::config::{VERSION_MAJOR, VERSION_MINOR};

/// A dotted `major.minor.patch` firmware version.
///
/// Field order matters: the derived `Ord` compares major, then minor, then
/// patch, which is how devices decide whether the server has a newer build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FirmwareVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u64,
}

impl FirmwareVersion {
    pub const fn new(major: u32, minor: u32, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Version published for counter value `counter`.
    pub const fn from_counter(counter: u64) -> Self {
        Self::new(VERSION_MAJOR, VERSION_MINOR, counter)
    }

    /// Parse the body returned by the server's version endpoint,
    /// e.g. `{"version": "1.1.42"}`.
    pub fn from_response(body: &str) -> Result<Self, VersionParseError> {
        let response: VersionResponse = serde_json::from_str(body)
            .map_err(|e| VersionParseError::Malformed(e.to_string()))?;
        response.version.parse()
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for FirmwareVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(VersionParseError::ComponentCount(parts.len()));
        }

        let invalid = |part: &str| VersionParseError::InvalidComponent(part.to_string());
        let major = parts[0].parse().map_err(|_| invalid(parts[0]))?;
        let minor = parts[1].parse().map_err(|_| invalid(parts[1]))?;
        let patch = parts[2].parse().map_err(|_| invalid(parts[2]))?;

        Ok(Self::new(major, minor, patch))
    }
}

#[derive(Deserialize)]
struct VersionResponse {
    version: String,
}

/// Errors from parsing a version string or version endpoint response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    /// Expected exactly three dot-separated components.
    ComponentCount(usize),
    /// A component is not a non-negative integer.
    InvalidComponent(String),
    /// Response body is not a JSON object with a string `version` field.
    Malformed(String),
}

impl fmt::Display for VersionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentCount(n) => {
                write!(f, "expected major.minor.patch, found {} component(s)", n)
            }
            Self::InvalidComponent(part) => write!(f, "invalid version component '{}'", part),
            Self::Malformed(e) => write!(f, "malformed version response: {}", e),
        }
    }
}

impl std::error::Error for VersionParseError {}
