//! Output formatting module

use ecodesign_domain::catalog::{Catalog, OptionKind};
use ecodesign_domain::model::{CalculationResult, ProjectParameters};
use ecodesign_domain::service::{
    generate_comparison_report, ClaimedMetrics, OptimizationOutcome, SuggestionEvaluation,
};
use ecodesign_types::{OutputFormat, Result};

pub fn output_result(
    output_format: OutputFormat,
    result: &CalculationResult,
    params: &ProjectParameters,
    catalog: &Catalog,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        print!("{}", generate_comparison_report(result, params, catalog, currency));
    }
    Ok(())
}

pub fn output_optimization(output_format: OutputFormat, outcome: &OptimizationOutcome, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "optimizedPercentages": outcome.percentages,
            "budget": outcome.budget,
            "surchargePct": outcome.surcharge_pct(),
            "levers": outcome.levers,
            "result": outcome.result,
            "explanation": outcome.explanation,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBlend Optimization");
    println!("==================");
    println!("Budget:          {:.2} {}", outcome.budget, currency);
    println!("Mixed surcharge: {:.2} {} ({:.2}%)", outcome.result.cost.surcharge_mixed, currency, outcome.surcharge_pct());
    println!("Carbon saved:    {:.2} tCO2", outcome.result.carbon.savings_tco2_mixed);
    println!();
    println!(
        "  {:<20} {:>14} {:>14} {:>14} {:>8}",
        "Category", "Extra cost", "tCO2 saved", "tCO2/unit", "Eco %"
    );
    for lever in &outcome.levers {
        let efficiency = lever.efficiency();
        let efficiency = if efficiency.is_finite() {
            format!("{:.6}", efficiency)
        } else {
            "free".to_string()
        };
        println!(
            "  {:<20} {:>14.2} {:>14.2} {:>14} {:>8.1}",
            lever.category.label(),
            lever.extra_cost,
            lever.carbon_saving,
            efficiency,
            lever.chosen_pct
        );
    }
    println!("\n{}", outcome.explanation);
    Ok(())
}

pub fn output_evaluation(output_format: OutputFormat, evaluation: &SuggestionEvaluation) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "claimed": evaluation.claimed,
            "recomputed": evaluation.recomputed,
            "maxRelativeGap": evaluation.max_relative_gap(),
            "blend": evaluation.parameters.blend,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nSuggestion Check");
    println!("================");
    println!("  {:<16} {:>16} {:>16}", "Metric", "Claimed", "Recomputed");
    print_metric_rows(&evaluation.claimed, &evaluation.recomputed);
    println!("Largest relative gap: {:.1}%", evaluation.max_relative_gap() * 100.0);
    print_blend(&evaluation.parameters);
    Ok(())
}

fn print_metric_rows(claimed: &ClaimedMetrics, recomputed: &ClaimedMetrics) {
    let rows = [
        ("Total cost", claimed.total_cost, recomputed.total_cost),
        ("Total carbon", claimed.total_carbon, recomputed.total_carbon),
        ("Surcharge", claimed.surcharge, recomputed.surcharge),
        ("Carbon savings", claimed.carbon_savings, recomputed.carbon_savings),
    ];
    for (label, c, r) in rows {
        println!("  {:<16} {:>16.2} {:>16.2}", label, c, r);
    }
}

fn print_blend(params: &ProjectParameters) {
    let b = &params.blend;
    println!(
        "Blend: concrete {:.0}%, steel {:.0}%, copper {:.0}%, aluminium {:.0}%, asphalt {:.0}%, personnel {:.0}%",
        b.concrete, b.steel, b.copper, b.aluminum, b.asphalt, b.personnel
    );
}

pub fn output_catalog(output_format: OutputFormat, catalog: &Catalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(catalog)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nUnit prices");
    println!("===========");
    println!(
        "  {:<28} {:>10} {:>10} {:>10} {:>8}  {}",
        "Item", "Default", "Min", "Max", "Step", "Unit"
    );
    for (name, p) in &catalog.prices {
        println!(
            "  {:<28} {:>10} {:>10} {:>10} {:>8}  {}",
            name, p.default, p.min, p.max, p.step, p.unit
        );
    }

    println!("\nEmission factors");
    println!("================");
    for (name, f) in &catalog.emission_factors {
        println!("  {:<28} {:>12}  {}", name, f.value, f.unit);
    }

    for kind in OptionKind::ALL {
        println!("\n{}", kind.label());
        for option in catalog.options(kind) {
            println!("  {:<28} {:>8.3} tCO2/t", option.name, option.footprint);
        }
    }
    Ok(())
}
