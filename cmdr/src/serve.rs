// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Speak the host message protocol over a pair of streams. Each line read is one JSON
//! request, and each response is written as one JSON line. Requests are handled one at
//! a time, in the order they arrive.

use std::io::Write;

use tintshade_core::{CommonResult, HostRequestOutcome, HostResponse, PaletteHost,
                     handle_host_request, try_parse_host_request};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{TerminalHost, try_io};

/// Tally of the requests seen by [`run_serve_loop`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServeReport {
    pub rendered: usize,
    pub rejected: usize,
    pub ignored: usize,
    pub malformed: usize,
}

impl ServeReport {
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.rendered + self.rejected + self.ignored + self.malformed
    }

    fn record(&mut self, outcome: HostRequestOutcome) {
        match outcome {
            HostRequestOutcome::Rendered { .. } => self.rendered += 1,
            HostRequestOutcome::Rejected => self.rejected += 1,
            HostRequestOutcome::Ignored => self.ignored += 1,
        }
    }
}

/// Read requests from `reader` until it is exhausted. Blank lines are skipped. A line
/// that isn't a valid request gets a [`HostResponse::Error`] describing the problem,
/// and the loop keeps going.
///
/// # Errors
///
/// Returns an error if reading fails, or if the `host` can't write a response.
pub async fn run_serve_loop<R, M, C>(
    reader: R,
    host: &mut TerminalHost<M, C>,
) -> CommonResult<ServeReport>
where
    R: AsyncBufRead + Unpin,
    M: Write,
    C: Write,
{
    let mut report = ServeReport::default();
    let mut lines = reader.lines();

    while let Some(line) = try_io(lines.next_line().await)? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match try_parse_host_request(line) {
            Ok(request) => {
                let outcome = handle_host_request(host, request)?;
                report.record(outcome);
            }
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(message = "Malformed request", error = %error);
                host.post_message(&HostResponse::Error {
                    message: error.to_string(),
                })?;
                report.malformed += 1;
            }
        }

        host.flush()?;
    }

    tracing::debug!(message = "Input closed", report = ?report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use r3bl_ansi_color::{ColorSupport, global_color_support};
    use serial_test::serial;

    use super::*;
    use crate::MessageFormat;

    async fn serve(input: &str) -> (ServeReport, Vec<serde_json::Value>, String) {
        global_color_support::set_override(ColorSupport::NoColor);
        let mut messages = Vec::new();
        let mut canvas = Vec::new();
        let report = {
            let mut host = TerminalHost::with_separate_canvas(
                &mut messages,
                &mut canvas,
                MessageFormat::Json,
            );
            run_serve_loop(input.as_bytes(), &mut host).await.unwrap()
        };
        let responses = String::from_utf8(messages)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (report, responses, String::from_utf8(canvas).unwrap())
    }

    #[tokio::test]
    #[serial]
    async fn test_requests_are_answered_in_order() {
        let input = concat!(
            r##"{"type":"generate-colors","color":"#336699"}"##,
            "\n",
            "\n",
            r#"{"type":"generate-colors","color":"nope"}"#,
            "\n",
            r#"{"type":"resize","width":300}"#,
            "\n",
            r##"{"type":"generate-colors","color":"#000000"}"##,
            "\n",
        );
        let (report, responses, canvas) = serve(input).await;

        assert_eq!(report, ServeReport {
            rendered: 2,
            rejected: 1,
            ignored: 1,
            malformed: 0,
        });
        assert_eq!(report.request_count(), 4);

        // The unknown request gets no response.
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["type"], "color-object");
        assert_eq!(responses[0]["colorObject"]["tints"]["5"], "#99b3cc");
        assert_eq!(responses[1]["type"], "error");
        assert_eq!(responses[1]["message"], "Invalid color");
        assert_eq!(responses[2]["colorObject"]["tints"]["10"], "#ffffff");
        assert_eq!(responses[2]["colorObject"]["shades"]["10"], "#000000");

        // Two palettes worth of swatch rows, each w/ a tint and a shade heading.
        assert_eq!(canvas.lines().count(), 2 * (22 + 2));
    }

    #[tokio::test]
    #[serial]
    async fn test_malformed_line_does_not_stop_the_loop() {
        let input = concat!(
            "this is not json\n",
            r##"{"type":"generate-colors","color":"#ffffff"}"##,
            "\n",
        );
        let (report, responses, _) = serve(input).await;

        assert_eq!(report.malformed, 1);
        assert_eq!(report.rendered, 1);
        assert_eq!(responses[0]["type"], "error");
        assert!(
            responses[0]["message"]
                .as_str()
                .unwrap()
                .contains("this is not json")
        );
        assert_eq!(responses[1]["colorObject"]["shades"]["5"], "#808080");
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_input() {
        let (report, responses, canvas) = serve("").await;
        assert_eq!(report, ServeReport::default());
        assert!(responses.is_empty());
        assert_eq!(canvas, "");
    }
}
