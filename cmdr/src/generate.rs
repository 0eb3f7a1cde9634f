// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use tintshade_core::{CommonResult, HostRequest, HostRequestOutcome, handle_host_request};

use crate::{MessageFormat, OutputFormat, TerminalHost};

/// Generate the palette for `color` once, and write it to `out` in the given `format`.
///
/// - [`OutputFormat::Swatches`] writes a short summary followed by one row per swatch.
/// - [`OutputFormat::Json`] writes only the host protocol response, so `out` holds a
///   single JSON object.
///
/// An invalid `color` is reported to `out` and results in
/// [`HostRequestOutcome::Rejected`].
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn try_generate<W: Write>(
    color: &str,
    format: OutputFormat,
    out: W,
) -> CommonResult<HostRequestOutcome> {
    let mut host = match format {
        OutputFormat::Swatches => {
            TerminalHost::with_shared_canvas(out, MessageFormat::Plain)
        }
        OutputFormat::Json => TerminalHost::with_hidden_canvas(out, MessageFormat::Json),
    };

    let outcome = handle_host_request(&mut host, HostRequest::GenerateColors {
        color: color.to_string(),
    })?;
    host.flush()?;

    Ok(outcome)
}
