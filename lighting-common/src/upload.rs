// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Upload form layout and outcome reporting.
//!
//! The HTTP transport lives in the upload tool; this module only describes
//! what goes into the request and how the server's answer is judged.

use std::io::{self, Write};

use crate::version::FirmwareVersion;

// --- Multipart form layout ---

pub const FIRMWARE_FIELD: &str = "firmware";
pub const FIRMWARE_FILENAME: &str = "firmware.bin";
pub const FIRMWARE_MIME: &str = "application/octet-stream";
pub const VERSION_FIELD: &str = "version";

/// Contents of one upload request: the binary and its version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareForm {
    pub firmware: Vec<u8>,
    pub version: String,
}

impl FirmwareForm {
    pub fn new(firmware: Vec<u8>, version: FirmwareVersion) -> Self {
        Self {
            firmware,
            version: version.to_string(),
        }
    }
}

/// Whether the server accepted the upload.
pub fn is_accepted_status(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Result of a single upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Server answered 200 or 201.
    Accepted { status: u16, body: String },
    /// Server answered with any other status.
    Rejected { status: u16, body: String },
    /// The request never produced a response.
    TransportFailed { message: String },
}

impl UploadOutcome {
    /// Classify an HTTP response.
    pub fn from_response(status: u16, body: String) -> Self {
        if is_accepted_status(status) {
            Self::Accepted { status, body }
        } else {
            Self::Rejected { status, body }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Write the console report for this outcome.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Accepted { status, body } | Self::Rejected { status, body } => {
                writeln!(out, "Status Code: {}", status)?;
                writeln!(out, "Response: {}", body)?;
                if self.is_success() {
                    writeln!(out, "✅ Upload successful!")
                } else {
                    writeln!(out, "❌ Upload failed!")
                }
            }
            Self::TransportFailed { message } => writeln!(out, "Error uploading: {}", message),
        }
    }
}
