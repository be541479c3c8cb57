//! Reference prices, factors and material options

use std::collections::BTreeMap;

use super::{Catalog, EmissionFactor, MaterialOption, PriceEntry};

fn price(unit: &str, default: f64, min: f64, max: f64, step: f64) -> PriceEntry {
    PriceEntry {
        unit: unit.to_string(),
        default,
        min,
        max,
        step,
    }
}

fn factor(value: f64, unit: &str) -> EmissionFactor {
    EmissionFactor {
        value,
        unit: unit.to_string(),
    }
}

fn options(entries: &[(&str, f64)]) -> Vec<MaterialOption> {
    entries
        .iter()
        .map(|(name, footprint)| MaterialOption {
            name: name.to_string(),
            footprint: *footprint,
        })
        .collect()
}

pub(super) fn catalog() -> Catalog {
    let prices: BTreeMap<String, PriceEntry> = [
        ("concrete.classic", price("EUR/m3", 150.0, 100.0, 300.0, 5.0)),
        ("concrete.eco", price("EUR/m3", 180.0, 100.0, 300.0, 5.0)),
        ("steel.classic", price("EUR/t", 865.0, 700.0, 1200.0, 10.0)),
        ("steel.eco", price("EUR/t", 925.0, 800.0, 1300.0, 10.0)),
        ("copper.classic", price("EUR/t", 9000.0, 7000.0, 12000.0, 100.0)),
        ("copper.eco", price("EUR/t", 8500.0, 6000.0, 11000.0, 100.0)),
        ("aluminum.classic", price("EUR/t", 2400.0, 1800.0, 3500.0, 50.0)),
        ("aluminum.eco", price("EUR/t", 2600.0, 1800.0, 3800.0, 50.0)),
        ("asphalt.classic", price("EUR/m3", 80.0, 50.0, 150.0, 5.0)),
        ("asphalt.eco", price("EUR/m3", 90.0, 60.0, 160.0, 5.0)),
        ("freight.classic", price("EUR/km", 1.5, 0.5, 3.0, 0.1)),
        ("freight.eco", price("EUR/km", 1.2, 0.5, 3.0, 0.1)),
        ("personnel.classic", price("EUR/km", 0.5, 0.1, 1.5, 0.05)),
        ("personnel.eco", price("EUR/km", 0.3, 0.1, 1.5, 0.05)),
        ("energy", price("EUR/kWh", 0.25, 0.1, 0.6, 0.01)),
        ("helicopter", price("EUR/h", 1500.0, 500.0, 5000.0, 100.0)),
        ("carbon", price("EUR/tCO2", 100.0, 0.0, 500.0, 10.0)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let emission_factors: BTreeMap<String, EmissionFactor> = [
        ("binder.classic", factor(0.752, "tCO2/t cement")),
        ("binder.eco", factor(0.407, "tCO2/t cement")),
        ("reinforcement.classic", factor(1.8, "tCO2/t")),
        ("reinforcement.eco", factor(1.8, "tCO2/t")),
        ("steel.classic", factor(1.8, "tCO2/t")),
        ("steel.eco", factor(0.4, "tCO2/t")),
        ("copper.classic", factor(4.5, "tCO2/t")),
        ("copper.eco", factor(1.5, "tCO2/t")),
        ("aluminum.classic", factor(8.6, "tCO2/t")),
        ("aluminum.eco", factor(4.0, "tCO2/t")),
        ("asphalt.classic", factor(0.05, "tCO2/m3")),
        ("asphalt.eco", factor(0.02, "tCO2/m3")),
        ("freight.classic", factor(0.25 / 1000.0, "tCO2/km")),
        ("freight.eco", factor(0.05 / 1000.0, "tCO2/km")),
        ("personnel.classic", factor(0.18 / 1000.0, "tCO2/km")),
        ("personnel.eco", factor(0.02 / 1000.0, "tCO2/km")),
        ("energy", factor(0.7 / 1000.0, "tCO2/kWh")),
        ("helicopter", factor(0.5, "tCO2/h")),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    Catalog {
        prices,
        emission_factors,
        binder_options: options(&[
            ("CEM I", 0.752),
            ("CEM II/A-LL", 0.653),
            ("CEM II/B-M", 0.537),
            ("CEM III/A", 0.407),
            ("CEM III/B", 0.258),
            ("CEM III/C", 0.163),
        ]),
        steel_options: options(&[
            ("Blast furnace (BF-BOF)", 1.8),
            ("Hydrogen direct reduction (H-DRI)", 0.6),
            ("Electric arc furnace, scrap", 0.4),
        ]),
        aluminum_options: options(&[
            ("Primary, coal power", 16.5),
            ("Primary, world average", 8.6),
            ("Primary, hydro power", 4.0),
            ("Recycled", 0.5),
        ]),
    }
}
