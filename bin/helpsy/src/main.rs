//! Helpsy CLI
//!
//! Drives the help-center page pipeline: bootstrap, ingestion, category
//! registration, and page generation.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use helpsy_generator::bootstrap::DEFAULT_CONTENT_DIR;

/// Command-line interface for Helpsy.
#[derive(Parser)]
#[command(
    name = "helpsy",
    version,
    about = "A help-center static-site page pipeline"
)]
struct Cli {
    /// Path to options file
    #[arg(short, long, default_value = "helpsy.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate page descriptors and write the route manifest
    Build {
        /// Content directory to scan
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: std::path::PathBuf,
        /// Override the configured base path (e.g., /help/)
        #[arg(long)]
        base_path: Option<String>,
        /// Where to write the route manifest
        #[arg(short, long, default_value = "routes.json")]
        manifest: std::path::PathBuf,
    },
    /// Validate options and content without generating pages
    Check {
        /// Content directory to scan
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: std::path::PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    helpsy::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            content_dir,
            base_path,
            manifest,
        } => {
            helpsy::cmd::build::run(&cli.config, &content_dir, base_path.as_deref(), &manifest)?;
        }
        Commands::Check {
            content_dir,
            strict,
        } => {
            helpsy::cmd::check::run(&cli.config, &content_dir, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["helpsy", "build", "--manifest", "out/routes.json"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("helpsy.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build {
                content_dir,
                base_path,
                manifest,
            } => {
                assert_eq!(content_dir, std::path::PathBuf::from(DEFAULT_CONTENT_DIR));
                assert!(base_path.is_none());
                assert_eq!(manifest, std::path::PathBuf::from("out/routes.json"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_with_base_path() {
        let args = ["helpsy", "build", "--base-path", "/help/"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build { base_path, .. } => {
                assert_eq!(base_path.as_deref(), Some("/help/"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["helpsy", "check", "--strict", "--content-dir", "content"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check {
                content_dir,
                strict,
            } => {
                assert_eq!(content_dir, std::path::PathBuf::from("content"));
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["helpsy", "-vvv", "build"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["helpsy", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
