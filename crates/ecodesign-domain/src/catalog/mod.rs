//! Unit-price catalog and emission-factor table
//!
//! Inert lookup data used to bootstrap project parameters and to list the
//! selectable low-carbon options. The calculator never checks parameters
//! against it.

mod builtin;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{ProjectParameters, ILLUSTRATIVE_PARAMETERS};

/// Default unit price and the range offered for adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub unit: String,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub value: f64,
    pub unit: String,
}

/// A selectable material with its footprint (tCO₂ per tonne)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialOption {
    pub name: String,
    pub footprint: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Binder,
    Steel,
    Aluminum,
}

impl OptionKind {
    pub const ALL: [OptionKind; 3] = [OptionKind::Binder, OptionKind::Steel, OptionKind::Aluminum];

    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Binder => "Cement binders",
            OptionKind::Steel => "Steel processes",
            OptionKind::Aluminum => "Aluminium processes",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub prices: BTreeMap<String, PriceEntry>,
    pub emission_factors: BTreeMap<String, EmissionFactor>,
    pub binder_options: Vec<MaterialOption>,
    pub steel_options: Vec<MaterialOption>,
    pub aluminum_options: Vec<MaterialOption>,
}

impl Catalog {
    /// Reference catalog shipped with the tool
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn price(&self, name: &str) -> Option<&PriceEntry> {
        self.prices
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, entry)| entry)
    }

    pub fn factor(&self, name: &str) -> Option<f64> {
        self.emission_factors
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, f)| f.value)
    }

    pub fn options(&self, kind: OptionKind) -> &[MaterialOption] {
        match kind {
            OptionKind::Binder => &self.binder_options,
            OptionKind::Steel => &self.steel_options,
            OptionKind::Aluminum => &self.aluminum_options,
        }
    }

    pub fn option(&self, kind: OptionKind, name: &str) -> Option<&MaterialOption> {
        let name = name.trim();
        self.options(kind)
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }

    /// Name the option whose footprint matches a parameter value
    pub fn option_by_footprint(&self, kind: OptionKind, footprint: f64) -> Option<&MaterialOption> {
        self.options(kind)
            .iter()
            .find(|o| (o.footprint - footprint).abs() < 1e-9)
    }

    /// Entries of `other` replace or extend this catalog
    pub fn merge(&mut self, other: Catalog) {
        self.prices.extend(other.prices);
        self.emission_factors.extend(other.emission_factors);
        merge_options(&mut self.binder_options, other.binder_options);
        merge_options(&mut self.steel_options, other.steel_options);
        merge_options(&mut self.aluminum_options, other.aluminum_options);
    }

    /// Illustrative quantities with this catalog's default prices and factors
    pub fn project_defaults(&self) -> ProjectParameters {
        let mut p = ILLUSTRATIVE_PARAMETERS;
        let price = |name: &str| self.price(name).map(|e| e.default);
        let factor = |name: &str| self.factor(name);

        set(&mut p.concrete.classic_unit_price, price("concrete.classic"));
        set(&mut p.concrete.eco_unit_price, price("concrete.eco"));
        set(&mut p.concrete.classic_binder_footprint, factor("binder.classic"));
        set(&mut p.concrete.eco_binder_footprint, factor("binder.eco"));
        set(&mut p.concrete.reinforcement.classic_factor, factor("reinforcement.classic"));
        set(&mut p.concrete.reinforcement.eco_factor, factor("reinforcement.eco"));

        for (name, line) in [
            ("steel", &mut p.steel),
            ("copper", &mut p.copper),
            ("aluminum", &mut p.aluminum),
            ("asphalt", &mut p.asphalt),
        ] {
            set(&mut line.classic_unit_price, price(&format!("{}.classic", name)));
            set(&mut line.eco_unit_price, price(&format!("{}.eco", name)));
            set(&mut line.classic_factor, factor(&format!("{}.classic", name)));
            set(&mut line.eco_factor, factor(&format!("{}.eco", name)));
        }

        set(&mut p.freight.classic_price_per_km, price("freight.classic"));
        set(&mut p.freight.eco_price_per_km, price("freight.eco"));
        set(&mut p.freight.classic_factor_per_km, factor("freight.classic"));
        set(&mut p.freight.eco_factor_per_km, factor("freight.eco"));
        set(&mut p.freight.helicopter_hourly_rate, price("helicopter"));
        set(&mut p.freight.helicopter_factor_per_hour, factor("helicopter"));

        set(&mut p.personnel.classic_price_per_km, price("personnel.classic"));
        set(&mut p.personnel.eco_price_per_km, price("personnel.eco"));
        set(&mut p.personnel.classic_factor_per_km, factor("personnel.classic"));
        set(&mut p.personnel.eco_factor_per_km, factor("personnel.eco"));

        set(&mut p.energy.price_per_kwh, price("energy"));
        set(&mut p.energy.factor_per_kwh, factor("energy"));

        set(&mut p.carbon_price_per_tonne, price("carbon"));
        p
    }
}

fn set(slot: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn merge_options(base: &mut Vec<MaterialOption>, extra: Vec<MaterialOption>) {
    for option in extra {
        match base.iter_mut().find(|o| o.name.eq_ignore_ascii_case(&option.name)) {
            Some(existing) => existing.footprint = option.footprint,
            None => base.push(option),
        }
    }
}
