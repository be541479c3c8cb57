//! Project parameters: the immutable input snapshot of one calculation
//!
//! Every field is always present. Project files that omit a field get the
//! neutral value (zero quantity, zero price, zero percentage, not reinforced).

use serde::{Deserialize, Serialize};

/// Schema version written into every project file
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Project category, descriptive only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Works,
    Services,
    Supplies,
}

impl ProjectType {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Works => "Works",
            ProjectType::Services => "Services",
            ProjectType::Supplies => "Supplies",
        }
    }
}

/// Identifying fields, not used in arithmetic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInfo {
    pub description: String,
    pub project_type: ProjectType,
    pub location: String,
    pub gps_coordinates: String,
}

impl ProjectInfo {
    const NEUTRAL: ProjectInfo = ProjectInfo {
        description: String::new(),
        project_type: ProjectType::Works,
        location: String::new(),
        gps_coordinates: String::new(),
    };
}

/// Generic material line (steel, copper, aluminium, asphalt)
///
/// Quantities are in the material's unit (t or m³), prices in currency per
/// unit and emission factors in tCO₂ per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialInputs {
    pub classic_quantity: f64,
    pub eco_quantity: f64,
    pub classic_unit_price: f64,
    pub eco_unit_price: f64,
    pub classic_factor: f64,
    pub eco_factor: f64,
}

impl MaterialInputs {
    const NEUTRAL: MaterialInputs = MaterialInputs {
        classic_quantity: 0.0,
        eco_quantity: 0.0,
        classic_unit_price: 0.0,
        eco_unit_price: 0.0,
        classic_factor: 0.0,
        eco_factor: 0.0,
    };
}

/// Reinforcement steel embedded in concrete
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reinforcement {
    pub enabled: bool,
    /// kg of reinforcement per m³ of concrete
    pub mass_kg_per_m3: f64,
    /// tCO₂ per tonne of reinforcement, classic design
    pub classic_factor: f64,
    /// tCO₂ per tonne of reinforcement, eco design
    pub eco_factor: f64,
}

impl Reinforcement {
    const NEUTRAL: Reinforcement = Reinforcement {
        enabled: false,
        mass_kg_per_m3: 0.0,
        classic_factor: 0.0,
        eco_factor: 0.0,
    };

    /// tCO₂ added per m³ of concrete; zero when the concrete is not reinforced
    pub fn contribution(&self, factor: f64) -> f64 {
        if self.enabled {
            self.mass_kg_per_m3 / 1000.0 * factor
        } else {
            0.0
        }
    }
}

/// Concrete inputs; the emission factor is composed from binder and reinforcement
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConcreteInputs {
    pub classic_volume_m3: f64,
    pub eco_volume_m3: f64,
    pub classic_unit_price: f64,
    pub eco_unit_price: f64,
    /// kg of cement per m³ of concrete
    pub cement_mass_kg_per_m3: f64,
    /// tCO₂ per tonne of cement, classic binder
    pub classic_binder_footprint: f64,
    /// tCO₂ per tonne of cement, selected low-carbon binder
    pub eco_binder_footprint: f64,
    pub reinforcement: Reinforcement,
}

impl ConcreteInputs {
    const NEUTRAL: ConcreteInputs = ConcreteInputs {
        classic_volume_m3: 0.0,
        eco_volume_m3: 0.0,
        classic_unit_price: 0.0,
        eco_unit_price: 0.0,
        cement_mass_kg_per_m3: 0.0,
        classic_binder_footprint: 0.0,
        eco_binder_footprint: 0.0,
        reinforcement: Reinforcement::NEUTRAL,
    };

    /// tCO₂ per m³, classic design
    pub fn classic_factor(&self) -> f64 {
        self.cement_mass_kg_per_m3 / 1000.0 * self.classic_binder_footprint
            + self.reinforcement.contribution(self.reinforcement.classic_factor)
    }

    /// tCO₂ per m³, eco design
    pub fn eco_factor(&self) -> f64 {
        self.cement_mass_kg_per_m3 / 1000.0 * self.eco_binder_footprint
            + self.reinforcement.contribution(self.reinforcement.eco_factor)
    }
}

/// Freight transport, with an optional helicopter term common to both designs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreightInputs {
    pub distance_km: f64,
    pub classic_price_per_km: f64,
    pub eco_price_per_km: f64,
    pub classic_factor_per_km: f64,
    pub eco_factor_per_km: f64,
    pub helicopter_hours: f64,
    pub helicopter_hourly_rate: f64,
    pub helicopter_factor_per_hour: f64,
}

impl FreightInputs {
    const NEUTRAL: FreightInputs = FreightInputs {
        distance_km: 0.0,
        classic_price_per_km: 0.0,
        eco_price_per_km: 0.0,
        classic_factor_per_km: 0.0,
        eco_factor_per_km: 0.0,
        helicopter_hours: 0.0,
        helicopter_hourly_rate: 0.0,
        helicopter_factor_per_hour: 0.0,
    };
}

/// Personnel travel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelInputs {
    pub distance_km: f64,
    pub classic_price_per_km: f64,
    pub eco_price_per_km: f64,
    pub classic_factor_per_km: f64,
    pub eco_factor_per_km: f64,
}

impl TravelInputs {
    const NEUTRAL: TravelInputs = TravelInputs {
        distance_km: 0.0,
        classic_price_per_km: 0.0,
        eco_price_per_km: 0.0,
        classic_factor_per_km: 0.0,
        eco_factor_per_km: 0.0,
    };
}

/// On-site energy from a single fuel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyInputs {
    pub consumption_kwh: f64,
    pub price_per_kwh: f64,
    pub factor_per_kwh: f64,
}

impl EnergyInputs {
    const NEUTRAL: EnergyInputs = EnergyInputs {
        consumption_kwh: 0.0,
        price_per_kwh: 0.0,
        factor_per_kwh: 0.0,
    };
}

/// Construction equipment emissions, supplied as absolute tCO₂ totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentEmissions {
    pub classic_tco2: f64,
    pub eco_tco2: f64,
}

impl EquipmentEmissions {
    const NEUTRAL: EquipmentEmissions = EquipmentEmissions {
        classic_tco2: 0.0,
        eco_tco2: 0.0,
    };
}

/// Share of the eco variant (0-100) used by the Mixed scenario
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlendPercentages {
    pub concrete: f64,
    pub steel: f64,
    pub copper: f64,
    pub aluminum: f64,
    pub asphalt: f64,
    pub personnel: f64,
}

impl BlendPercentages {
    const NEUTRAL: BlendPercentages = BlendPercentages {
        concrete: 0.0,
        steel: 0.0,
        copper: 0.0,
        aluminum: 0.0,
        asphalt: 0.0,
        personnel: 0.0,
    };

    /// Same percentage for every blendable category
    pub const fn uniform(pct: f64) -> Self {
        Self {
            concrete: pct,
            steel: pct,
            copper: pct,
            aluminum: pct,
            asphalt: pct,
            personnel: pct,
        }
    }
}

/// Full input snapshot for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectParameters {
    pub schema_version: u32,
    pub project: ProjectInfo,
    pub concrete: ConcreteInputs,
    pub steel: MaterialInputs,
    pub copper: MaterialInputs,
    pub aluminum: MaterialInputs,
    pub asphalt: MaterialInputs,
    pub freight: FreightInputs,
    pub personnel: TravelInputs,
    pub energy: EnergyInputs,
    pub equipment: EquipmentEmissions,
    pub blend: BlendPercentages,
    pub carbon_price_per_tonne: f64,
    pub lifetime_years: f64,
}

impl ProjectParameters {
    /// Neutral parameters: every quantity, price and percentage is zero
    pub const NEUTRAL: ProjectParameters = ProjectParameters {
        schema_version: CURRENT_SCHEMA_VERSION,
        project: ProjectInfo::NEUTRAL,
        concrete: ConcreteInputs::NEUTRAL,
        steel: MaterialInputs::NEUTRAL,
        copper: MaterialInputs::NEUTRAL,
        aluminum: MaterialInputs::NEUTRAL,
        asphalt: MaterialInputs::NEUTRAL,
        freight: FreightInputs::NEUTRAL,
        personnel: TravelInputs::NEUTRAL,
        energy: EnergyInputs::NEUTRAL,
        equipment: EquipmentEmissions::NEUTRAL,
        blend: BlendPercentages::NEUTRAL,
        carbon_price_per_tonne: 0.0,
        lifetime_years: 0.0,
    };

    pub fn illustrative() -> Self {
        ILLUSTRATIVE_PARAMETERS
    }
}

impl Default for ProjectParameters {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Illustrative project used by tests and to bootstrap new project files
pub const ILLUSTRATIVE_PARAMETERS: ProjectParameters = ProjectParameters {
    schema_version: CURRENT_SCHEMA_VERSION,
    project: ProjectInfo::NEUTRAL,
    concrete: ConcreteInputs {
        classic_volume_m3: 1000.0,
        eco_volume_m3: 1000.0,
        classic_unit_price: 150.0,
        eco_unit_price: 180.0,
        cement_mass_kg_per_m3: 350.0,
        classic_binder_footprint: 0.752,
        eco_binder_footprint: 0.407,
        reinforcement: Reinforcement {
            enabled: false,
            mass_kg_per_m3: 100.0,
            classic_factor: 1.8,
            eco_factor: 1.8,
        },
    },
    steel: MaterialInputs {
        classic_quantity: 50.0,
        eco_quantity: 50.0,
        classic_unit_price: 865.0,
        eco_unit_price: 925.0,
        classic_factor: 1.8,
        eco_factor: 0.4,
    },
    copper: MaterialInputs {
        classic_quantity: 5.0,
        eco_quantity: 5.0,
        classic_unit_price: 9000.0,
        eco_unit_price: 8500.0,
        classic_factor: 4.5,
        eco_factor: 1.5,
    },
    aluminum: MaterialInputs {
        classic_quantity: 10.0,
        eco_quantity: 10.0,
        classic_unit_price: 2400.0,
        eco_unit_price: 2600.0,
        classic_factor: 8.6,
        eco_factor: 4.0,
    },
    asphalt: MaterialInputs {
        classic_quantity: 500.0,
        eco_quantity: 500.0,
        classic_unit_price: 80.0,
        eco_unit_price: 90.0,
        classic_factor: 0.05,
        eco_factor: 0.02,
    },
    freight: FreightInputs {
        distance_km: 10000.0,
        classic_price_per_km: 1.5,
        eco_price_per_km: 1.2,
        classic_factor_per_km: 0.25 / 1000.0,
        eco_factor_per_km: 0.05 / 1000.0,
        helicopter_hours: 0.0,
        helicopter_hourly_rate: 1500.0,
        helicopter_factor_per_hour: 0.5,
    },
    personnel: TravelInputs {
        distance_km: 5000.0,
        classic_price_per_km: 0.5,
        eco_price_per_km: 0.3,
        classic_factor_per_km: 0.18 / 1000.0,
        eco_factor_per_km: 0.02 / 1000.0,
    },
    energy: EnergyInputs {
        consumption_kwh: 20000.0,
        price_per_kwh: 0.25,
        factor_per_kwh: 0.7 / 1000.0,
    },
    equipment: EquipmentEmissions {
        classic_tco2: 10.0,
        eco_tco2: 5.0,
    },
    blend: BlendPercentages::uniform(50.0),
    carbon_price_per_tonne: 100.0,
    lifetime_years: 50.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let params = ProjectParameters::default();
        assert_eq!(params.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(params.concrete.classic_volume_m3, 0.0);
        assert_eq!(params.blend, BlendPercentages::uniform(0.0));
        assert!(!params.concrete.reinforcement.enabled);
    }

    #[test]
    fn test_concrete_factor_without_reinforcement() {
        // 350 kg cement/m³ x 0.752 tCO₂/t = 0.2632 tCO₂/m³
        let concrete = ILLUSTRATIVE_PARAMETERS.concrete;
        assert!((concrete.classic_factor() - 0.2632).abs() < 1e-9);
    }

    #[test]
    fn test_concrete_factor_with_reinforcement() {
        let mut concrete = ILLUSTRATIVE_PARAMETERS.concrete;
        concrete.reinforcement.enabled = true;
        // 0.2632 + 100/1000 x 1.8 = 0.4432
        assert!((concrete.classic_factor() - 0.4432).abs() < 1e-9);
        // 0.35 x 0.407 + 0.18 = 0.32245
        assert!((concrete.eco_factor() - 0.32245).abs() < 1e-9);
    }

    #[test]
    fn test_reinforcement_factors_may_diverge() {
        let mut concrete = ILLUSTRATIVE_PARAMETERS.concrete;
        concrete.reinforcement.enabled = true;
        concrete.reinforcement.eco_factor = 0.4;
        let eco_without_binder = concrete.eco_factor() - 0.35 * 0.407;
        assert!((eco_without_binder - 0.04).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fields_deserialize_to_neutral() {
        let json = r#"{"steel": {"classicQuantity": 12.0}}"#;
        let params: ProjectParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.steel.classic_quantity, 12.0);
        assert_eq!(params.steel.eco_quantity, 0.0);
        assert_eq!(params.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(params.lifetime_years, 0.0);
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = serde_json::to_value(&ILLUSTRATIVE_PARAMETERS).unwrap();
        assert_eq!(json["carbonPricePerTonne"], 100.0);
        assert_eq!(json["concrete"]["cementMassKgPerM3"], 350.0);
        assert_eq!(json["project"]["projectType"], "works");
    }
}
