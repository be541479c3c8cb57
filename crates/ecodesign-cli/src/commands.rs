//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_catalog, output_evaluation, output_optimization, output_result};
use ecodesign_app::config::Config;
use ecodesign_app::export::export_comparison;
use ecodesign_app::project_file::{load_project, save_project};
use ecodesign_app::ComparisonSession;
use ecodesign_domain::model::ProjectParameters;
use ecodesign_domain::service::PercentageSuggestion;
use ecodesign_types::{Error, OutputFormat, Result};
use std::path::{Path, PathBuf};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Calculate { project, pct } => {
            cmd_calculate(&cli, &config, project.as_deref(), pct, output_format)
        }

        Commands::Init { path, neutral, force } => cmd_init(&config, path, *neutral, *force),

        Commands::Export { project, output } => cmd_export(&cli, &config, project, output),

        Commands::Optimize {
            project,
            max_surcharge,
            apply,
            output,
        } => cmd_optimize(
            &cli,
            &config,
            project,
            *max_surcharge,
            *apply,
            output.as_deref(),
            output_format,
        ),

        Commands::ApplySuggestion {
            project,
            response,
            output,
        } => cmd_apply_suggestion(&cli, project, response, output.clone(), output_format),

        Commands::Catalog => output_catalog(output_format, &config.catalog()?),

        Commands::Config {
            show,
            set_format,
            set_currency,
            set_catalog,
            set_project,
            reset,
        } => cmd_config(
            *show,
            *set_format,
            set_currency.clone(),
            set_catalog.clone(),
            set_project.clone(),
            *reset,
        ),
    }
}

/// Project file, else the configured default project, else catalog defaults
fn resolve_parameters(cli: &Cli, config: &Config, project: Option<&Path>) -> Result<ProjectParameters> {
    let path = project.or(config.default_project.as_deref());
    match path {
        Some(path) => {
            if cli.verbose {
                eprintln!("Loading project: {}", path.display());
            }
            load_project(path)
        }
        None => {
            if cli.verbose {
                eprintln!("No project given, using catalog defaults");
            }
            Ok(config.catalog()?.project_defaults())
        }
    }
}

fn cmd_calculate(
    cli: &Cli,
    config: &Config,
    project: Option<&Path>,
    pct: &[(String, f64)],
    output_format: OutputFormat,
) -> Result<()> {
    let params = resolve_parameters(cli, config, project)?;
    let mut session = ComparisonSession::new(params);

    if !pct.is_empty() {
        let mut suggestion = PercentageSuggestion::new();
        for (key, value) in pct {
            suggestion.0.insert(key.clone(), *value);
        }
        session.apply_suggestion(&suggestion)?;
    }

    let result = session.result().clone();
    let catalog = config.catalog()?;
    output_result(output_format, &result, session.parameters(), &catalog, &config.currency)
}

fn cmd_init(config: &Config, path: &Path, neutral: bool, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let params = if neutral {
        ProjectParameters::default()
    } else {
        config.catalog()?.project_defaults()
    };
    save_project(path, &params)?;
    println!("Project written to {}", path.display());
    Ok(())
}

fn cmd_export(cli: &Cli, config: &Config, project: &Path, output: &Path) -> Result<()> {
    let params = resolve_parameters(cli, config, Some(project))?;
    let mut session = ComparisonSession::new(params);
    let result = session.result().clone();
    export_comparison(&result, session.parameters(), &config.currency, output)?;
    println!("Exported to {}", output.display());
    Ok(())
}

fn cmd_optimize(
    cli: &Cli,
    config: &Config,
    project: &Path,
    max_surcharge: f64,
    apply: bool,
    output: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    if !max_surcharge.is_finite() || max_surcharge < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "--max-surcharge must be a non-negative number, got {}",
            max_surcharge
        )));
    }

    let params = resolve_parameters(cli, config, Some(project))?;
    let mut session = ComparisonSession::new(params);
    let outcome = session.optimize(max_surcharge);
    output_optimization(output_format, &outcome, &config.currency)?;

    if apply {
        let output = output.ok_or_else(|| Error::InvalidArgument("--apply needs --output".to_string()))?;
        save_project(output, session.parameters())?;
        eprintln!("Optimized project written to {}", output.display());
    }
    Ok(())
}

fn cmd_apply_suggestion(
    cli: &Cli,
    project: &Path,
    response: &Path,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let params = load_project(project)?;
    if !response.exists() {
        return Err(Error::FileNotFound(response.display().to_string()));
    }
    let payload = std::fs::read_to_string(response)?;

    let mut session = ComparisonSession::new(params);
    let evaluation = session.apply_optimizer_json(&payload)?;
    output_evaluation(output_format, &evaluation)?;

    if evaluation.max_relative_gap() > 0.01 {
        eprintln!("Warning: claimed metrics differ from the recomputed ones; recomputed values are authoritative");
    }

    let target = output.unwrap_or_else(|| project.to_path_buf());
    save_project(&target, session.parameters())?;
    if cli.verbose {
        eprintln!("Suggestion merged into {}", target.display());
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_format: Option<OutputFormat>,
    set_currency: Option<String>,
    set_catalog: Option<PathBuf>,
    set_project: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_format {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency = currency;
        modified = true;
    }

    if let Some(catalog_path) = set_catalog {
        // Fail before saving a path that does not parse
        ecodesign_app::catalog::load_catalog_file(&catalog_path)?;
        config.catalog_path = Some(catalog_path);
        modified = true;
    }

    if let Some(project) = set_project {
        config.default_project = Some(project);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
