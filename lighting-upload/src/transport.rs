// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! HTTP transport for the firmware server.

use std::error::Error as _;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::debug;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;

use lighting_common::config;
use lighting_common::upload::{FIRMWARE_FIELD, FIRMWARE_FILENAME, FIRMWARE_MIME, VERSION_FIELD};
use lighting_common::{FirmwareForm, FirmwareVersion, UploadOutcome};

/// Blocking HTTP client bound to one firmware server.
pub struct Transport {
    client: Client,
    upload_url: String,
    version_url: String,
}

impl Transport {
    /// Create a transport for `server`. Requests never time out.
    pub fn new(server: &str, force: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            upload_url: config::upload_url(server, force),
            version_url: config::version_url(server),
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// POST the firmware form once. Never fails: transport errors are
    /// folded into the outcome.
    pub fn upload(&self, form: FirmwareForm) -> UploadOutcome {
        match self.send_form(form) {
            Ok((status, body)) => UploadOutcome::from_response(status, body),
            Err(e) => UploadOutcome::TransportFailed {
                message: describe(&e),
            },
        }
    }

    fn send_form(&self, form: FirmwareForm) -> reqwest::Result<(u16, String)> {
        debug!(
            "POST {} ({} bytes, version {})",
            self.upload_url,
            form.firmware.len(),
            form.version
        );

        let firmware = Part::bytes(form.firmware)
            .file_name(FIRMWARE_FILENAME)
            .mime_str(FIRMWARE_MIME)?;
        let multipart = Form::new()
            .part(FIRMWARE_FIELD, firmware)
            .text(VERSION_FIELD, form.version);

        let response = self.client.post(&self.upload_url).multipart(multipart).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok((status, body))
    }

    /// Fetch the latest version published on the server.
    pub fn latest_version(&self) -> Result<FirmwareVersion> {
        debug!("GET {}", self.version_url);

        let response = self
            .client
            .get(&self.version_url)
            .send()
            .map_err(|e| anyhow::anyhow!("Failed to reach {}: {}", self.version_url, describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Version check failed, HTTP {}", status.as_u16());
        }

        let body = response.text().context("Failed to read version response")?;
        FirmwareVersion::from_response(&body)
            .with_context(|| format!("Unexpected response from {}: {}", self.version_url, body))
    }
}

/// Render a reqwest error with its full source chain, which is where the
/// useful part ("Connection refused", DNS failure) usually lives.
fn describe(e: &reqwest::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 1 on loopback is never listening in CI; the connection is refused
    // immediately without leaving the machine.
    const UNREACHABLE: &str = "http://127.0.0.1:1";

    #[test]
    fn test_urls_follow_config() {
        let transport = Transport::new("http://localhost:3000/", true).unwrap();
        assert_eq!(
            transport.upload_url(),
            "http://localhost:3000/api/upload?force=true"
        );
        assert_eq!(transport.version_url, "http://localhost:3000/api/version");
    }

    #[test]
    fn test_upload_unreachable_is_transport_failure() {
        let transport = Transport::new(UNREACHABLE, true).unwrap();
        let form = FirmwareForm::new(vec![0u8; 16], FirmwareVersion::from_counter(1));

        match transport.upload(form) {
            UploadOutcome::TransportFailed { message } => assert!(!message.is_empty()),
            other => panic!("expected transport failure, got {:?}", other),
        }
    }

    #[test]
    fn test_latest_version_unreachable_is_error() {
        let transport = Transport::new(UNREACHABLE, false).unwrap();
        let err = transport.latest_version().unwrap_err();
        assert!(err.to_string().starts_with("Failed to reach http://127.0.0.1:1/api/version"));
    }
}
