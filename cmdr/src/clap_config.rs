// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(bin_name = "tintshade")]
#[command(about = "🎨 Tints & shades from a single base color")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  tintshade [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        help = "Don't draw colored blocks, only print the hex values. Same as setting `NO_COLOR`"
    )]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "🌈 Generate 11 tints and 11 shades for a color\n💡 Eg: `tintshade generate '#336699'`"
    )]
    Generate {
        #[arg(
            value_name = "color",
            help = "Base color as 6 hex digits, w/ or w/out a leading `#`"
        )]
        color: String,

        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Swatches)]
        format: OutputFormat,
    },

    #[clap(
        about = "🔌 Act as a palette host: read one JSON request per line from stdin, answer on stdout\n💡 Eg: `echo '{\"type\":\"generate-colors\",\"color\":\"#336699\"}' | tintshade serve`"
    )]
    Serve {},
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[clap(help = "Draw one colored row per tint and shade")]
    Swatches,
    #[clap(help = "Print the palette as a JSON object")]
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_parse_generate() {
        let cli_arg =
            CLIArg::try_parse_from(["tintshade", "generate", "#336699", "-f", "json"])
                .unwrap();
        let CLICommand::Generate { color, format } = cli_arg.command else {
            panic!("expected generate");
        };
        assert_eq!(color, "#336699");
        assert_eq!(format, OutputFormat::Json);
        assert!(!cli_arg.global_options.enable_logging);
    }

    #[test]
    fn test_parse_serve_with_global_options() {
        let cli_arg =
            CLIArg::try_parse_from(["tintshade", "serve", "-l", "--no-color"]).unwrap();
        assert!(matches!(cli_arg.command, CLICommand::Serve {}));
        assert!(cli_arg.global_options.enable_logging);
        assert!(cli_arg.global_options.no_color);
    }
}
