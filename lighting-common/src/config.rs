// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Default locations and endpoints.
//!
//! Every value here can be overridden from the command line; these are what
//! the tool uses when run from the firmware project root with no flags.

// --- Filesystem ---

/// Plain-text file holding the version counter.
pub const VERSION_FILE: &str = "version.txt";

/// Build artifact produced by PlatformIO for the ESP32 devkit environment.
pub const FIRMWARE_PATH: &str = ".pio/build/esp32-devkit/firmware.bin";

// --- Server ---

pub const SERVER_URL: &str = "https://lighting-firmware-server.onrender.com";
pub const UPLOAD_ENDPOINT: &str = "/api/upload";

/// Endpoint the devices poll for the latest published version.
pub const VERSION_ENDPOINT: &str = "/api/version";

// --- Version prefix ---

pub const VERSION_MAJOR: u32 = 1;
pub const VERSION_MINOR: u32 = 1;

/// Build the upload URL for `server`.
///
/// With `force` set the server overwrites an existing upload of the same
/// version instead of rejecting it.
pub fn upload_url(server: &str, force: bool) -> String {
    let base = server.trim_end_matches('/');
    if force {
        format!("{}{}?force=true", base, UPLOAD_ENDPOINT)
    } else {
        format!("{}{}", base, UPLOAD_ENDPOINT)
    }
}

/// Build the latest-version URL for `server`.
pub fn version_url(server: &str) -> String {
    format!("{}{}", server.trim_end_matches('/'), VERSION_ENDPOINT)
}
