//! Domain model types

pub mod breakdown;
pub mod category;
pub mod parameters;
pub mod result;
pub mod scenario;

pub use breakdown::{blend_value, Breakdown, CarbonValueEntry};
pub use category::Category;
pub use parameters::{
    BlendPercentages, ConcreteInputs, EnergyInputs, EquipmentEmissions, FreightInputs, MaterialInputs,
    ProjectInfo, ProjectParameters, ProjectType, Reinforcement, TravelInputs, CURRENT_SCHEMA_VERSION,
    ILLUSTRATIVE_PARAMETERS,
};
pub use result::{CalculationResult, CarbonSummary, CostSummary, Payback, NO_PAYBACK};
pub use scenario::{Scenario, ScenarioPair, ScenarioTotals};
