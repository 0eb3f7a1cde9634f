// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`PaletteHost`] that lives in the terminal. Messages go to one writer, and swatches
//! go to a [`Canvas`]: the same writer, a separate one (stderr in `serve`, so the
//! responses on stdout stay machine readable), or nowhere.
//!
//! Colors are written w/ [`r3bl_ansi_color`], which downgrades truecolor to the ANSI
//! 256 palette when [`global_color_support::detect`] says so.

use std::io::{Sink, Write};

use r3bl_ansi_color::{ColorSupport, fg_rgb_color, global_color_support};
use tintshade_core::{CommonError, CommonErrorType, CommonResult, HostResponse,
                     PaletteHost, RgbColor, Swatch, SwatchKind, ok,
                     try_encode_host_response};

use crate::ui_str;

/// How [`HostResponse`]s are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageFormat {
    /// One JSON object per line, the host protocol.
    Json,
    /// Human readable summary and errors.
    Plain,
}

/// Where swatch rows are drawn.
#[derive(Debug)]
pub enum Canvas<C: Write> {
    /// Interleaved w/ the messages, on the same writer.
    SameAsMessages,
    /// On a writer of their own.
    Separate(C),
    /// Not at all.
    Hidden,
}

#[derive(Debug)]
pub struct TerminalHost<M: Write, C: Write = Sink> {
    messages: M,
    canvas: Canvas<C>,
    message_format: MessageFormat,
    last_kind: Option<SwatchKind>,
}

impl<M: Write> TerminalHost<M> {
    /// Swatch rows follow the messages on the same writer.
    pub fn with_shared_canvas(messages: M, message_format: MessageFormat) -> Self {
        Self::new(messages, Canvas::SameAsMessages, message_format)
    }

    /// Only messages are written. Swatches are dropped.
    pub fn with_hidden_canvas(messages: M, message_format: MessageFormat) -> Self {
        Self::new(messages, Canvas::Hidden, message_format)
    }
}

impl<M: Write, C: Write> TerminalHost<M, C> {
    pub fn new(messages: M, canvas: Canvas<C>, message_format: MessageFormat) -> Self {
        Self {
            messages,
            canvas,
            message_format,
            last_kind: None,
        }
    }

    pub fn with_separate_canvas(
        messages: M,
        canvas: C,
        message_format: MessageFormat,
    ) -> Self {
        Self::new(messages, Canvas::Separate(canvas), message_format)
    }

    /// # Errors
    ///
    /// Returns a [`CommonErrorType::IOError`] if either writer fails to flush.
    pub fn flush(&mut self) -> CommonResult<()> {
        try_io(self.messages.flush())?;
        if let Canvas::Separate(canvas) = &mut self.canvas {
            try_io(canvas.flush())?;
        }
        ok!()
    }
}

/// Convert a [`std::io::Error`] into a [`CommonError`] w/ [`CommonErrorType::IOError`].
///
/// # Errors
///
/// Returns an error if `result` is an error.
pub fn try_io<T>(result: std::io::Result<T>) -> CommonResult<T> {
    result.or_else(|error| {
        CommonError::new_error_result(CommonErrorType::IOError, &error.to_string())
    })
}

/// The hex value printed on top of the swatch color, in a readable text color. Plain
/// text when there's no color support.
#[must_use]
pub fn format_swatch_block(swatch: &Swatch) -> String {
    let text = format!(" {} ", swatch.hex);
    if global_color_support::detect() == ColorSupport::NoColor {
        return text;
    }
    let RgbColor { red, green, blue } = swatch.color;
    fg_rgb_color(contrasting_text_color(swatch.color), &text)
        .bg_rgb_color((red, green, blue))
        .to_string()
}

/// Black text on light colors, white text on dark ones.
fn contrasting_text_color(color: RgbColor) -> (u8, u8, u8) {
    let RgbColor { red, green, blue } = color;
    let brightness =
        299 * u32::from(red) + 587 * u32::from(green) + 114 * u32::from(blue);
    if brightness > 150_000 {
        (0, 0, 0)
    } else {
        (255, 255, 255)
    }
}

impl<M: Write, C: Write> PaletteHost for TerminalHost<M, C> {
    fn post_message(&mut self, response: &HostResponse) -> CommonResult<()> {
        let line = match (self.message_format, response) {
            (MessageFormat::Json, _) => try_encode_host_response(response)?,
            (MessageFormat::Plain, HostResponse::ColorObject { color_object }) => {
                ui_str::palette_summary_msg(color_object)
            }
            (MessageFormat::Plain, HostResponse::Error { message }) => {
                ui_str::error_msg(message)
            }
        };
        try_io(writeln!(self.messages, "{line}"))?;
        // A new palette starts a new set of headings.
        self.last_kind = None;
        ok!()
    }

    fn render_swatch(&mut self, swatch: &Swatch) -> CommonResult<()> {
        let target: &mut dyn Write = match &mut self.canvas {
            Canvas::Hidden => return ok!(),
            Canvas::SameAsMessages => &mut self.messages,
            Canvas::Separate(canvas) => canvas,
        };

        if self.last_kind != Some(swatch.kind) {
            try_io(writeln!(target, "{}", ui_str::heading_for(swatch.kind)))?;
            self.last_kind = Some(swatch.kind);
        }

        // The terminal has no vertical offsets, rows are already in order.
        tracing::trace!(
            message = "Render swatch",
            kind = %swatch.kind,
            label = %swatch.label,
            y_offset = swatch.y_offset
        );

        let block = format_swatch_block(swatch);
        try_io(writeln!(target, "  {:>2}  {block}", swatch.label))?;
        ok!()
    }
}
