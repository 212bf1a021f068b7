use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::Measure;
use crate::output::{ColorMode, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "tbap")]
#[command(about = "Trees, Buckets and Pipes personality scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (default: nearest .tbap.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved results
    #[arg(long = "store-dir", global = true, env = "TBAP_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    /// Output format (default from config, else terminal)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// When to colour terminal output
    #[arg(long, value_enum, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a commented .tbap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List the assessment questions
    Questions {
        /// Only questions for one measure
        #[arg(long)]
        measure: Option<Measure>,

        /// Question file to use instead of the bundled set
        #[arg(long)]
        questions: Option<PathBuf>,
    },

    /// Score answered questions
    Score {
        /// JSON object mapping question id to slider value
        #[arg(long)]
        responses: PathBuf,

        /// Question file to use instead of the bundled set
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Keep the result as the current assessment
        #[arg(long)]
        save: bool,
    },

    /// Score values set directly on each slider
    Manual {
        /// Tree position (1-99)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=99))]
        tree: u8,

        /// Tree strength (0-100, default 100)
        #[arg(long = "tree-strength", value_parser = clap::value_parser!(u8).range(0..=100))]
        tree_strength: Option<u8>,

        #[arg(long)]
        bucket: u8,

        #[arg(long)]
        thickness: u8,

        #[arg(long)]
        input: u8,

        #[arg(long)]
        output: u8,

        /// Keep the result as the current assessment
        #[arg(long)]
        save: bool,
    },

    /// Show the saved assessment
    Show,

    /// Forget the saved assessment
    Clear,

    /// Print band tables
    Bands {
        /// Only the table for one measure
        #[arg(long)]
        measure: Option<Measure>,
    },

    /// Check reference content and questions for gaps and overlaps
    ValidateContent {
        /// Reference content JSON (default: built-in tables)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Question file (default: bundled questions)
        #[arg(long)]
        questions: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_manual_command() {
        let cli = Cli::parse_from([
            "tbap",
            "manual",
            "--tree",
            "20",
            "--bucket",
            "70",
            "--thickness",
            "30",
            "--input",
            "50",
            "--output",
            "40",
            "--save",
        ]);

        match cli.command {
            Commands::Manual {
                tree,
                tree_strength,
                bucket,
                save,
                ..
            } => {
                assert_eq!(tree, 20);
                assert_eq!(tree_strength, None);
                assert_eq!(bucket, 70);
                assert!(save);
            }
            _ => panic!("Expected Manual command"),
        }
    }

    #[test]
    fn test_tree_position_outside_range_is_rejected() {
        let result = Cli::try_parse_from([
            "tbap",
            "manual",
            "--tree",
            "0",
            "--bucket",
            "1",
            "--thickness",
            "1",
            "--input",
            "1",
            "--output",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tbap", "show", "--format", "json", "-vv"]);
        assert_eq!(cli.global.format, Some(OutputFormat::Json));
        assert_eq!(cli.global.verbosity, 2);
        assert!(matches!(cli.command, Commands::Show));
    }

    #[test]
    fn test_bands_measure_accepts_aliases() {
        let cli = Cli::parse_from(["tbap", "bands", "--measure", "input_pipe"]);
        match cli.command {
            Commands::Bands { measure } => assert_eq!(measure, Some(Measure::Input)),
            _ => panic!("Expected Bands command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["tbap", "init", "--force"]);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
