// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Messages exchanged w/ the host UI. Both directions are JSON objects tagged by a
//! `"type"` field:
//!
//! ```json
//! {"type":"generate-colors","color":"#336699"}
//! {"type":"color-object","colorObject":{"tints":{..},"shades":{..}}}
//! {"type":"error","message":"Invalid color"}
//! ```

use serde::{Deserialize, Serialize};

use crate::PaletteResult;

/// The message posted to the host when the requested color can't be parsed.
pub const INVALID_COLOR_MESSAGE: &str = "Invalid color";

/// Host -> palette.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostRequest {
    GenerateColors {
        color: String,
    },
    /// Any other `"type"`. These are ignored.
    #[serde(other)]
    Unknown,
}

/// Palette -> host.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostResponse {
    ColorObject {
        #[serde(rename = "colorObject")]
        color_object: PaletteResult,
    },
    Error {
        message: String,
    },
}

impl HostResponse {
    #[must_use]
    pub fn invalid_color() -> Self {
        Self::Error {
            message: INVALID_COLOR_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HostProtocolError {
    #[error("Malformed host request: {input:?}")]
    #[diagnostic(
        code(tintshade::host::malformed_request),
        help("Send one JSON object per line, eg: {{\"type\":\"generate-colors\",\"color\":\"#336699\"}}")
    )]
    MalformedRequest {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Can't serialize host response")]
    #[diagnostic(code(tintshade::host::unserializable_response))]
    UnserializableResponse(#[source] serde_json::Error),
}

/// Parse one JSON encoded [`HostRequest`].
///
/// # Errors
///
/// Returns [`HostProtocolError::MalformedRequest`] if `input` isn't a JSON object w/ a
/// string `"type"` field, or if a known `"type"` is missing its fields.
pub fn try_parse_host_request(input: &str) -> Result<HostRequest, HostProtocolError> {
    serde_json::from_str(input).map_err(|source| HostProtocolError::MalformedRequest {
        input: input.to_string(),
        source,
    })
}

/// Encode a [`HostResponse`] as a single line of JSON (no trailing newline).
///
/// # Errors
///
/// Returns [`HostProtocolError::UnserializableResponse`] if serialization fails.
pub fn try_encode_host_response(
    response: &HostResponse,
) -> Result<String, HostProtocolError> {
    serde_json::to_string(response).map_err(HostProtocolError::UnserializableResponse)
}
