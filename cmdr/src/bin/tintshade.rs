// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::ExitCode;

use clap::Parser;
use r3bl_ansi_color::{ColorSupport, Stream, examine_env_vars_to_determine_color_support,
                      global_color_support};
use tintshade_cmdr::{CLIArg, CLICommand, try_run_command};
use tintshade_core::{CommonResult, try_initialize_logging};

#[tokio::main]
async fn main() -> CommonResult<ExitCode> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    if cli_arg.global_options.no_color {
        global_color_support::set_override(ColorSupport::NoColor);
    } else if matches!(cli_arg.command, CLICommand::Serve {})
        && global_color_support::try_get_override().is_err()
    {
        // Swatches go to stderr in serve, so its color support is the one that matters.
        global_color_support::set_override(examine_env_vars_to_determine_color_support(
            Stream::Stderr,
        ));
    }

    let exit = try_run_command(
        cli_arg.command,
        tokio::io::BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        std::io::stderr(),
    )
    .await?;

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...", exit = ?exit);
    });

    Ok(exit.into())
}
