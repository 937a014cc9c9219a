//! Morphmap CLI
//!
//! Command-line interface for the morphmap alignment engine

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use morphmap_rules::Coordinate;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "morphmap")]
#[command(about = "Align a source syntax tree with the tree reparsed from compiler output")]
#[command(version = morphmap_core::VERSION)]
#[command(
    long_about = "morphmap replays an alignment fixture (both texts, both trees and the\n\
provenance recorded while compiling) and reports which output characters were\n\
carried, substituted or inserted, and where each one came from.\n\
\n\
Examples:\n  \
morphmap align fixture.json                 # Ranges, classes and diagnostics\n  \
morphmap align fixture.json --format json   # Machine-readable result\n  \
morphmap query fixture.json --offset 12     # What output offset 12 maps back to\n  \
morphmap config init                        # Write a starter .morphmaprc.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.morphmaprc.json/.morphmaprc.toml/morphmap.yaml)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Align a fixture and print its ranges, character classes and diagnostics
    Align {
        /// Fixture document to align
        #[arg(help = "Path to an alignment fixture (JSON)")]
        fixture: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "human", help = "Output format")]
        format: OutputFormat,
    },

    /// Show which ranges hold an offset and where it maps to
    Query {
        /// Fixture document to align
        #[arg(help = "Path to an alignment fixture (JSON)")]
        fixture: PathBuf,

        /// Byte offset to look up
        #[arg(long, help = "Byte offset into the chosen text")]
        offset: u32,

        /// Which text the offset refers to
        #[arg(long, default_value = "output", help = "Text the offset refers to")]
        side: SideArg,

        /// Output format
        #[arg(short, long, default_value = "human", help = "Output format")]
        format: OutputFormat,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a starter configuration file in the current directory
    Init {
        /// Configuration file format
        #[arg(long, default_value = "json", help = "Configuration file format")]
        format: ConfigFormat,

        /// Overwrite existing configuration file
        #[arg(long, help = "Overwrite existing configuration file")]
        force: bool,
    },

    /// Show the configuration in effect
    Show,

    /// Print the JSON Schema of the configuration file
    Schema,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON format for programmatic consumption
    Json,
    /// One line per range
    Compact,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SideArg {
    Source,
    Output,
}

impl From<SideArg> for Coordinate {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Source => Coordinate::Source,
            SideArg::Output => Coordinate::Output,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConfigFormat {
    /// JSON configuration format
    Json,
    /// TOML configuration format
    Toml,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    // RUST_LOG still takes precedence over -v
    morphmap_core::init_tracing_with(log_directive(cli.verbose));

    if !run_command(cli)? {
        std::process::exit(1);
    }
    Ok(())
}

/// Default filter for the given number of `-v` flags
fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "morphmap=info",
        1 => "morphmap=debug",
        _ => "morphmap=trace",
    }
}

/// Run the selected command; `false` means it finished with error diagnostics
fn run_command(cli: Cli) -> anyhow::Result<bool> {
    let config = cli.config.as_deref();
    match cli.command {
        Some(Commands::Align { fixture, format }) => {
            commands::align_command(&fixture, format, config)
        }

        Some(Commands::Query {
            fixture,
            offset,
            side,
            format,
        }) => commands::query_command(&fixture, offset, side.into(), format, config).map(|()| true),

        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { format, force } => {
                commands::config_init_command(format, force).map(|()| true)
            }
            ConfigAction::Show => commands::config_show_command(config).map(|()| true),
            ConfigAction::Schema => commands::config_schema_command().map(|()| true),
        },

        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_log_level() {
        assert_eq!(log_directive(0), "morphmap=info");
        assert_eq!(log_directive(1), "morphmap=debug");
        assert_eq!(log_directive(4), "morphmap=trace");
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
