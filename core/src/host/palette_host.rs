// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonError, CommonErrorType, CommonResult, HostRequest, HostResponse,
            Swatch, generate_palette, layout_swatches};

/// The application that asks for palettes and draws them. It is driven by
/// [`handle_host_request`], one request at a time.
pub trait PaletteHost {
    /// Send a message back to the host UI.
    ///
    /// # Errors
    ///
    /// Implementations return an error if the message can't be delivered.
    fn post_message(&mut self, response: &HostResponse) -> CommonResult<()>;

    /// Draw a single swatch at [`Swatch::y_offset`].
    ///
    /// # Errors
    ///
    /// Implementations return an error if the swatch can't be drawn.
    fn render_swatch(&mut self, swatch: &Swatch) -> CommonResult<()>;
}

/// What happened to a request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HostRequestOutcome {
    /// The palette was posted and this many swatches were drawn.
    Rendered { swatch_count: usize },
    /// The color was invalid, and an error message was posted.
    Rejected,
    /// Not a request this handler knows about. Nothing was posted.
    Ignored,
}

/// Generate the palette for a [`HostRequest::GenerateColors`], post it to the `host`,
/// then draw one swatch per color (all the tints, then all the shades).
///
/// An invalid color posts [`HostResponse::invalid_color`] and draws nothing.
///
/// # Errors
///
/// Returns whatever error the `host` returns.
pub fn handle_host_request(
    host: &mut impl PaletteHost,
    request: HostRequest,
) -> CommonResult<HostRequestOutcome> {
    let color = match request {
        HostRequest::GenerateColors { color } => color,
        HostRequest::Unknown => {
            tracing::debug!(message = "Ignoring unknown host request");
            return Ok(HostRequestOutcome::Ignored);
        }
    };

    let palette = match generate_palette(&color) {
        Ok(it) => it,
        Err(report)
            if CommonError::is_error_type(
                &report,
                CommonErrorType::InvalidHexColorFormat,
            ) =>
        {
            host.post_message(&HostResponse::invalid_color())?;
            return Ok(HostRequestOutcome::Rejected);
        }
        Err(report) => return Err(report),
    };

    let swatches = layout_swatches(&palette);
    host.post_message(&HostResponse::ColorObject {
        color_object: palette,
    })?;
    for swatch in &swatches {
        host.render_swatch(swatch)?;
    }

    tracing::info!(
        message = "Rendered palette",
        %color,
        swatch_count = swatches.len()
    );
    Ok(HostRequestOutcome::Rendered {
        swatch_count: swatches.len(),
    })
}
