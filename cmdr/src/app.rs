// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run one [`CLICommand`] against a set of standard streams. The binary passes the
//! process' own stdin, stdout, and stderr, tests pass in-memory buffers.

use std::{io::Write, process::ExitCode};

use tintshade_core::{CommonResult, HostRequestOutcome};
use tokio::io::AsyncBufRead;

use crate::{CLICommand, MessageFormat, TerminalHost, run_serve_loop, try_generate,
            try_io, ui_str};

/// How a command ended, short of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandExit {
    Success,
    /// `generate` was given a color it couldn't parse.
    InvalidColor,
}

impl From<CommandExit> for ExitCode {
    fn from(exit: CommandExit) -> Self {
        match exit {
            CommandExit::Success => ExitCode::SUCCESS,
            CommandExit::InvalidColor => ExitCode::FAILURE,
        }
    }
}

/// - `generate` writes everything to `stdout`.
/// - `serve` answers requests from `stdin` on `stdout`, draws swatches on `stderr`, and
///   says goodbye on `stderr` once `stdin` is closed.
///
/// # Errors
///
/// Returns an error if reading or writing any of the streams fails.
pub async fn try_run_command<R, O, E>(
    command: CLICommand,
    stdin: R,
    stdout: O,
    mut stderr: E,
) -> CommonResult<CommandExit>
where
    R: AsyncBufRead + Unpin,
    O: Write,
    E: Write,
{
    match command {
        CLICommand::Generate { color, format } => {
            match try_generate(&color, format, stdout)? {
                HostRequestOutcome::Rejected => Ok(CommandExit::InvalidColor),
                HostRequestOutcome::Rendered { .. } | HostRequestOutcome::Ignored => {
                    Ok(CommandExit::Success)
                }
            }
        }
        CLICommand::Serve {} => {
            let report = {
                let mut host = TerminalHost::with_separate_canvas(
                    stdout,
                    &mut stderr,
                    MessageFormat::Json,
                );
                run_serve_loop(stdin, &mut host).await?
            };
            try_io(writeln!(
                stderr,
                "{}",
                ui_str::goodbye_msg(report.request_count())
            ))?;
            Ok(CommandExit::Success)
        }
    }
}
