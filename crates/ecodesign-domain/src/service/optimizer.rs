//! Deterministic blend optimizer
//!
//! Picks the six blend percentages that maximise mixed carbon savings while
//! the mixed surcharge stays within a share of the classic total cost.
//! Every mixed value is affine in its own percentage, so this is a linear
//! program with a single budget row, solved exactly by ratio:
//! - free levers (cheaper without more carbon, or greener at no cost) go to 100 %
//! - levers that cost more and emit more stay at 0 %
//! - paying levers are bought by tCO₂ saved per currency unit
//! - levers that are cheaper but emit more are sold for budget only while
//!   they lose less carbon per unit than the next purchase gains

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use super::calculator::calculate;
use super::categories::{blendable_categories, descriptor, BlendRule};
use crate::model::{BlendPercentages, CalculationResult, Category, ProjectParameters};

/// Cost and carbon effect of switching one category fully to eco
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lever {
    pub category: Category,
    /// eco cost - classic cost
    pub extra_cost: f64,
    /// classic carbon - eco carbon
    pub carbon_saving: f64,
    pub chosen_pct: f64,
}

impl Lever {
    /// tCO₂ saved per currency unit spent.
    ///
    /// For a lever that is cheaper but emits more, this is the tCO₂ given up
    /// per currency unit freed. Free levers are infinitely efficient.
    pub fn efficiency(&self) -> f64 {
        if self.extra_cost != 0.0 && self.carbon_saving * self.extra_cost > 0.0 {
            self.carbon_saving / self.extra_cost
        } else {
            f64::INFINITY
        }
    }

    /// No extra cost and no extra carbon, with a gain on at least one axis
    pub fn is_free(&self) -> bool {
        self.extra_cost <= 0.0
            && self.carbon_saving >= 0.0
            && (self.extra_cost < 0.0 || self.carbon_saving > 0.0)
    }

    /// Cheaper in eco but emits more
    pub fn is_traded(&self) -> bool {
        self.extra_cost < 0.0 && self.carbon_saving < 0.0
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationOutcome {
    pub percentages: BlendPercentages,
    pub parameters: ProjectParameters,
    pub result: CalculationResult,
    pub budget: f64,
    pub levers: Vec<Lever>,
    pub explanation: String,
}

impl OptimizationOutcome {
    /// Mixed surcharge as a percentage of the classic total cost
    pub fn surcharge_pct(&self) -> f64 {
        let classic = self.result.cost.totals.classic;
        if classic > 0.0 {
            self.result.cost.surcharge_mixed / classic * 100.0
        } else {
            0.0
        }
    }
}

pub fn optimize_blend(params: &ProjectParameters, max_surcharge_pct: f64) -> OptimizationOutcome {
    let base = calculate(params);
    let classic_total = base.cost.totals.classic;
    let budget = if classic_total > 0.0 {
        classic_total * max_surcharge_pct.max(0.0) / 100.0
    } else {
        0.0
    };

    let mut levers: Vec<Lever> = blendable_categories()
        .map(|category| {
            let cost = base.cost_breakdown(category);
            let carbon = base.carbon_breakdown(category);
            Lever {
                category,
                extra_cost: cost.eco - cost.classic,
                carbon_saving: carbon.classic - carbon.eco,
                chosen_pct: 0.0,
            }
        })
        .collect();

    let mut remaining = budget;

    // Levers that cost nothing and lose no carbon are always taken and free up budget.
    for lever in levers.iter_mut() {
        if lever.is_free() {
            lever.chosen_pct = 100.0;
            remaining -= lever.extra_cost;
        }
    }

    let mut buys: Vec<usize> = (0..levers.len())
        .filter(|&i| levers[i].carbon_saving > 0.0 && levers[i].extra_cost > 0.0)
        .collect();
    buys.sort_by(|&a, &b| {
        levers[b]
            .efficiency()
            .partial_cmp(&levers[a].efficiency())
            .unwrap_or(Ordering::Equal)
    });

    // Cheaper but more carbon: sold for budget, cheapest carbon per unit first.
    let mut sells: Vec<usize> = (0..levers.len())
        .filter(|&i| levers[i].carbon_saving < 0.0 && levers[i].extra_cost < 0.0)
        .collect();
    sells.sort_by(|&a, &b| {
        levers[a]
            .efficiency()
            .partial_cmp(&levers[b].efficiency())
            .unwrap_or(Ordering::Equal)
    });

    let mut next_sell = 0;
    for idx in buys {
        let buy_efficiency = levers[idx].efficiency();
        let full_cost = levers[idx].extra_cost;

        // A sell is worth it while it loses less carbon per unit than this buy gains.
        while remaining < full_cost && next_sell < sells.len() {
            let sell = &mut levers[sells[next_sell]];
            if sell.efficiency() >= buy_efficiency {
                break;
            }
            let available = -sell.extra_cost * (100.0 - sell.chosen_pct) / 100.0;
            let amount = available.min(full_cost - remaining);
            sell.chosen_pct += amount / -sell.extra_cost * 100.0;
            remaining += amount;
            if amount >= available {
                sell.chosen_pct = 100.0;
                next_sell += 1;
            }
        }

        if remaining <= 0.0 {
            break;
        }
        let lever = &mut levers[idx];
        let pct = (remaining / lever.extra_cost * 100.0).min(100.0);
        lever.chosen_pct = pct;
        remaining -= lever.extra_cost * pct / 100.0;
        if pct < 100.0 {
            break;
        }
    }

    let mut percentages = BlendPercentages::default();
    for lever in &levers {
        if let BlendRule::Percentage(slot) = descriptor(lever.category).blend {
            *(slot.get_mut)(&mut percentages) = lever.chosen_pct;
        }
    }

    let mut parameters = params.clone();
    parameters.blend = percentages;
    let result = calculate(&parameters);

    debug!(
        budget,
        surcharge_mixed = result.cost.surcharge_mixed,
        savings_tco2_mixed = result.carbon.savings_tco2_mixed,
        "blend optimization complete"
    );

    let explanation = explain(&levers, budget, max_surcharge_pct, &result);

    OptimizationOutcome {
        percentages,
        parameters,
        result,
        budget,
        levers,
        explanation,
    }
}

fn explain(levers: &[Lever], budget: f64, max_surcharge_pct: f64, result: &CalculationResult) -> String {
    let mut ranked: Vec<&Lever> = levers
        .iter()
        .filter(|l| l.chosen_pct > 0.0 && !l.is_traded())
        .collect();
    ranked.sort_by(|a, b| b.efficiency().partial_cmp(&a.efficiency()).unwrap_or(Ordering::Equal));

    let mut text = format!(
        "Budget of {:.0} ({:.1}% of the classic cost). ",
        budget, max_surcharge_pct
    );
    if ranked.is_empty() {
        text.push_str("No eco variant saves carbon within this budget; the mixed design stays classic.");
        return text;
    }
    let chosen: Vec<String> = ranked
        .iter()
        .map(|l| format!("{} {:.0}%", l.category.label(), l.chosen_pct))
        .collect();
    text.push_str(&format!(
        "Levers by carbon saved per unit of cost: {}. Mixed design saves {:.2} tCO2 for a surcharge of {:.0}.",
        chosen.join(", "),
        result.carbon.savings_tco2_mixed,
        result.cost.surcharge_mixed
    ));
    let traded: Vec<String> = levers
        .iter()
        .filter(|l| l.chosen_pct > 0.0 && l.is_traded())
        .map(|l| format!("{} {:.0}%", l.category.label(), l.chosen_pct))
        .collect();
    if !traded.is_empty() {
        text.push_str(&format!(
            " Cheaper eco variants that emit more were used to fund it: {}.",
            traded.join(", ")
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ILLUSTRATIVE_PARAMETERS;

    #[test]
    fn test_zero_budget_takes_only_free_savings_and_their_margin() {
        let outcome = optimize_blend(&ILLUSTRATIVE_PARAMETERS, 0.0);
        let p = outcome.percentages;
        // copper and personnel travel are cheaper in eco
        assert_eq!(p.copper, 100.0);
        assert_eq!(p.personnel, 100.0);
        // their 3500 margin pays steel (3000) then a quarter of aluminium
        assert!((p.steel - 100.0).abs() < 1e-9);
        assert!((p.aluminum - 25.0).abs() < 1e-6);
        assert!(p.concrete < 1e-6);
        assert!(p.asphalt < 1e-6);
        assert!(outcome.result.cost.surcharge_mixed <= 1e-6);
    }

    #[test]
    fn test_large_budget_switches_everything() {
        let outcome = optimize_blend(&ILLUSTRATIVE_PARAMETERS, 100.0);
        assert_eq!(outcome.percentages, BlendPercentages::uniform(100.0));
        for category in blendable_categories() {
            let carbon = outcome.result.carbon_breakdown(category);
            assert_eq!(carbon.mixed, carbon.eco, "{:?}", category);
        }
    }

    #[test]
    fn test_surcharge_stays_within_budget() {
        for max in [1.0, 2.5, 5.0, 10.0] {
            let outcome = optimize_blend(&ILLUSTRATIVE_PARAMETERS, max);
            assert!(outcome.surcharge_pct() <= max + 1e-9, "max {}", max);
        }
    }

    #[test]
    fn test_lever_adding_carbon_is_never_chosen() {
        let mut params = ILLUSTRATIVE_PARAMETERS;
        params.asphalt.eco_factor = 0.09;
        params.asphalt.eco_unit_price = 10.0;
        let outcome = optimize_blend(&params, 100.0);
        assert_eq!(outcome.percentages.asphalt, 0.0);
    }

    fn savings_within_budget(params: &ProjectParameters, blend: BlendPercentages, budget: f64) -> Option<f64> {
        let mut candidate = params.clone();
        candidate.blend = blend;
        let result = calculate(&candidate);
        (result.cost.surcharge_mixed <= budget + 1e-6).then_some(result.carbon.savings_tco2_mixed)
    }

    /// No 0/50/100 % combination within budget saves more than the optimizer
    fn assert_beats_grid(params: &ProjectParameters, max_surcharge_pct: f64) {
        let outcome = optimize_blend(params, max_surcharge_pct);
        let best = outcome.result.carbon.savings_tco2_mixed;
        assert!(outcome.result.cost.surcharge_mixed <= outcome.budget + 1e-6);

        let steps = [0.0, 50.0, 100.0];
        for index in 0..3usize.pow(6) {
            let pick = |slot: u32| steps[index / 3usize.pow(slot) % 3];
            let blend = BlendPercentages {
                concrete: pick(0),
                steel: pick(1),
                copper: pick(2),
                aluminum: pick(3),
                asphalt: pick(4),
                personnel: pick(5),
            };
            if let Some(savings) = savings_within_budget(params, blend, outcome.budget) {
                assert!(
                    best >= savings - 1e-6,
                    "{:?} saves {} > optimizer {}",
                    blend,
                    savings,
                    best
                );
            }
        }
    }

    #[test]
    fn test_cheaper_eco_without_carbon_gain_funds_other_levers() {
        let mut params = ILLUSTRATIVE_PARAMETERS;
        params.asphalt.eco_factor = params.asphalt.classic_factor;
        params.asphalt.eco_unit_price = 70.0;
        let outcome = optimize_blend(&params, 0.0);
        let p = outcome.percentages;
        assert_eq!(p.asphalt, 100.0);
        assert!((p.aluminum - 100.0).abs() < 1e-9);
        // 3500 + 5000 margin, minus steel and aluminium, leaves 3500 of 30000 for concrete
        assert!((p.concrete - 3500.0 / 30000.0 * 100.0).abs() < 1e-6);

        let mut alternative = params.clone();
        alternative.blend = BlendPercentages {
            concrete: 10.0,
            steel: 100.0,
            copper: 100.0,
            aluminum: 100.0,
            asphalt: 100.0,
            personnel: 100.0,
        };
        let alternative = calculate(&alternative);
        assert!(outcome.result.carbon.savings_tco2_mixed > alternative.carbon.savings_tco2_mixed);
        assert_beats_grid(&params, 0.0);
    }

    #[test]
    fn test_cheap_high_carbon_lever_sold_when_it_pays() {
        let mut params = ILLUSTRATIVE_PARAMETERS;
        // 20000 cheaper for 5 tCO2 more: far better than concrete's rate
        params.asphalt.eco_factor = 0.06;
        params.asphalt.eco_unit_price = 40.0;
        let outcome = optimize_blend(&params, 0.0);
        assert_eq!(outcome.percentages.asphalt, 100.0);
        assert!(outcome.percentages.concrete > 50.0);
        assert!(outcome.explanation.contains("emit more"));
        assert_beats_grid(&params, 0.0);
    }

    #[test]
    fn test_optimum_on_illustrative_budgets() {
        for max in [0.0, 0.5, 2.0, 10.0] {
            assert_beats_grid(&ILLUSTRATIVE_PARAMETERS, max);
        }
    }

    #[test]
    fn test_empty_project_has_no_budget() {
        let outcome = optimize_blend(&ProjectParameters::default(), 10.0);
        assert_eq!(outcome.budget, 0.0);
        assert_eq!(outcome.percentages, BlendPercentages::default());
        assert!(outcome.explanation.contains("stays classic"));
    }

    #[test]
    fn test_other_parameters_untouched() {
        let outcome = optimize_blend(&ILLUSTRATIVE_PARAMETERS, 3.0);
        assert_eq!(outcome.parameters.concrete, ILLUSTRATIVE_PARAMETERS.concrete);
        assert_eq!(outcome.parameters.carbon_price_per_tonne, 100.0);
    }
}
