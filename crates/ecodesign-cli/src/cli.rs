//! CLI definition using clap

use clap::{Parser, Subcommand};
use ecodesign_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecodesign-comparator")]
#[command(version)]
#[command(about = "Compare classic, mixed and eco-design variants of a project on cost and carbon")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (also shows debug log events on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the three scenarios for a project
    Calculate {
        /// Project file (.json or .toml). Illustrative values if omitted.
        project: Option<PathBuf>,

        /// Override a blend percentage, e.g. --pct concrete=80
        #[arg(long = "pct", value_name = "CATEGORY=PCT", value_parser = parse_pct)]
        pct: Vec<(String, f64)>,
    },

    /// Write a project file to start from
    Init {
        /// Output path (.json or .toml)
        path: PathBuf,

        /// Write the neutral (all zero) parameter set instead of catalog defaults
        #[arg(long)]
        neutral: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Export a comparison to Excel or CSV
    Export {
        /// Project file
        project: PathBuf,

        /// Output file (.xlsx or .csv)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Pick blend percentages that save the most carbon within a surcharge budget
    Optimize {
        /// Project file
        project: PathBuf,

        /// Maximum mixed surcharge, in percent of the classic total cost
        #[arg(long, default_value = "5")]
        max_surcharge: f64,

        /// Write the optimized parameters to a project file
        #[arg(long, requires = "output")]
        apply: bool,

        /// Output project file for --apply
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate and merge an external optimizer response
    ApplySuggestion {
        /// Project file
        project: PathBuf,

        /// Optimizer response (JSON)
        response: PathBuf,

        /// Output project file (defaults to overwriting PROJECT)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List price ranges, emission factors and material options
    Catalog,

    /// Configure settings
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set currency label
        #[arg(long)]
        set_currency: Option<String>,

        /// Set catalog override file (TOML)
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set default project file
        #[arg(long)]
        set_project: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Parse `category=percentage`
pub fn parse_pct(s: &str) -> Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=PCT, got '{}'", s))?;
    let pct: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid percentage '{}'", value))?;
    Ok((key.trim().to_string(), pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pct() {
        assert_eq!(parse_pct("concrete=80").unwrap(), ("concrete".to_string(), 80.0));
        assert_eq!(parse_pct(" steel = 12.5 ").unwrap(), ("steel".to_string(), 12.5));
        assert!(parse_pct("concrete").is_err());
        assert!(parse_pct("concrete=lots").is_err());
    }

    #[test]
    fn test_calculate_accepts_repeated_pct() {
        let cli = Cli::try_parse_from([
            "ecodesign-comparator",
            "calculate",
            "--pct",
            "concrete=80",
            "--pct",
            "copper=0",
            "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Calculate { project, pct } => {
                assert!(project.is_none());
                assert_eq!(pct.len(), 2);
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_apply_requires_output() {
        let parsed = Cli::try_parse_from(["ecodesign-comparator", "optimize", "p.json", "--apply"]);
        assert!(parsed.is_err());
    }
}
