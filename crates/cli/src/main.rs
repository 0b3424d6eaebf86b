//! setupctl - SetupForge command-line front end
//!
//! Generates vehicle setups from templates, lists the car and track catalog
//! and the template table, and normalizes setup files.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod config;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::GenerateArgs;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "setupctl")]
#[command(about = "SetupForge CLI - Generate and normalize racing sim vehicle setups")]
#[command(version)]
#[command(long_about = "
setupctl generates vehicle setups from baseline templates, adapted to the
track, weather, driving style and session type.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (defaults to ~/.setupctl/config.yaml)
    #[arg(long, global = true, env = "SETUPCTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a setup
    Generate(GenerateArgs),

    /// List catalog cars
    Cars {
        /// Only cars in this category
        #[arg(long)]
        category: Option<String>,

        /// Only cars whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// List catalog tracks
    Tracks {
        /// Only tracks of this type (road, oval, dirt, rallycross)
        #[arg(long = "type")]
        track_type: Option<String>,
    },

    /// List setup templates, including configured overrides
    Templates,

    /// Validate and normalize a setup file (JSON or YAML)
    Normalize {
        /// Setup file to read
        file: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = ["setupctl", "setupforge_pipeline", "setupforge_catalog"]
        .map(|target| format!("{target}={log_level}"))
        .join(",");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(error::exit_code(&e))
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate(args) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::generate::execute(args, &config, cli.json)
        }
        Commands::Cars { category, search } => {
            commands::catalog::cars(category.as_deref(), search.as_deref(), cli.json)
        }
        Commands::Tracks { track_type } => {
            commands::catalog::tracks(track_type.as_deref(), cli.json)
        }
        Commands::Templates => {
            let config = Config::load(cli.config.as_deref())?;
            commands::templates::execute(&config, cli.json)
        }
        Commands::Normalize { file, output } => {
            commands::normalize::execute(file, output.as_deref(), cli.json)
        }
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    // --- Global flag parsing ---

    #[test]
    fn parse_templates_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["setupctl", "templates"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Templates));
        Ok(())
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "setupctl", "cars", "--json", "-vv", "--config", "cfg.yaml",
        ])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.yaml")));
        Ok(())
    }

    // --- Generate parsing ---

    #[test]
    fn parse_generate_by_class() -> TestResult {
        let cli = Cli::try_parse_from([
            "setupctl",
            "generate",
            "--class",
            "GT3",
            "--track-type",
            "road",
            "--style",
            "safe",
            "--grip",
            "low",
            "--temperature",
            "-3",
        ])?;
        match &cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.class.as_deref(), Some("GT3"));
                assert_eq!(args.track_type.as_deref(), Some("road"));
                assert_eq!(args.style.as_deref(), Some("safe"));
                assert_eq!(args.grip.as_deref(), Some("low"));
                assert_eq!(args.temperature, Some(-3.0));
                assert!(args.car.is_none());
            }
            _ => return Err("expected Generate command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_generate_by_catalog() -> TestResult {
        let cli = Cli::try_parse_from([
            "setupctl", "generate", "--car", "1", "--track", "5", "--sheet", "out.txt",
        ])?;
        match &cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.car, Some(1));
                assert_eq!(args.track, Some(5));
                assert_eq!(args.sheet, Some(PathBuf::from("out.txt")));
            }
            _ => return Err("expected Generate command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_tracks_type_filter() -> TestResult {
        let cli = Cli::try_parse_from(["setupctl", "tracks", "--type", "oval"])?;
        match &cli.command {
            Commands::Tracks { track_type } => assert_eq!(track_type.as_deref(), Some("oval")),
            _ => return Err("expected Tracks command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_normalize_with_output() -> TestResult {
        let cli = Cli::try_parse_from(["setupctl", "normalize", "in.json", "-o", "out.yaml"])?;
        match &cli.command {
            Commands::Normalize { file, output } => {
                assert_eq!(file, &PathBuf::from("in.json"));
                assert_eq!(output.as_deref(), Some(std::path::Path::new("out.yaml")));
            }
            _ => return Err("expected Normalize command".into()),
        }
        Ok(())
    }

    // --- Rejection / error cases ---

    #[test]
    fn reject_no_subcommand() {
        assert!(Cli::try_parse_from(["setupctl"]).is_err());
    }

    #[test]
    fn reject_generate_without_target() {
        assert!(Cli::try_parse_from(["setupctl", "generate"]).is_err());
    }

    #[test]
    fn reject_class_without_track_type() {
        assert!(Cli::try_parse_from(["setupctl", "generate", "--class", "GT3"]).is_err());
    }

    #[test]
    fn reject_car_without_track() {
        assert!(Cli::try_parse_from(["setupctl", "generate", "--car", "1"]).is_err());
    }

    #[test]
    fn reject_class_and_car_together() {
        let result = Cli::try_parse_from([
            "setupctl", "generate", "--class", "GT3", "--track-type", "road", "--car", "1",
            "--track", "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn reject_non_numeric_car() {
        let result =
            Cli::try_parse_from(["setupctl", "generate", "--car", "bmw", "--track", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn reject_missing_completion_shell() {
        assert!(Cli::try_parse_from(["setupctl", "completion"]).is_err());
    }
}
