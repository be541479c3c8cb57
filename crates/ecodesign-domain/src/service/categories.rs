//! Static category descriptor table
//!
//! Each category declares how its classic and eco values are computed on
//! both axes, and whether the Mixed scenario blends it or follows classic.

use crate::model::{BlendPercentages, Category, ProjectParameters, ScenarioPair};

/// Energy used by the eco design, relative to classic
pub const ECO_ENERGY_RATIO: f64 = 0.8;

/// Access to one blend percentage slot
#[derive(Clone, Copy)]
pub struct BlendSlot {
    pub get: fn(&BlendPercentages) -> f64,
    pub get_mut: fn(&mut BlendPercentages) -> &mut f64,
}

/// How the Mixed scenario is derived for a category
#[derive(Clone, Copy)]
pub enum BlendRule {
    /// Linear blend driven by a declared percentage
    Percentage(BlendSlot),
    /// No declared percentage: mixed equals classic
    FollowClassic,
}

impl BlendRule {
    pub fn percentage(&self, blend: &BlendPercentages) -> Option<f64> {
        match self {
            BlendRule::Percentage(slot) => Some((slot.get)(blend)),
            BlendRule::FollowClassic => None,
        }
    }

    pub fn is_blendable(&self) -> bool {
        matches!(self, BlendRule::Percentage(_))
    }
}

pub struct CategoryDescriptor {
    pub category: Category,
    pub cost: fn(&ProjectParameters) -> ScenarioPair,
    pub carbon: fn(&ProjectParameters) -> ScenarioPair,
    pub blend: BlendRule,
}

pub static CATEGORY_TABLE: [CategoryDescriptor; 9] = [
    CategoryDescriptor {
        category: Category::Concrete,
        cost: concrete_cost,
        carbon: concrete_carbon,
        blend: BlendRule::Percentage(BlendSlot {
            get: |b| b.concrete,
            get_mut: concrete_slot,
        }),
    },
    CategoryDescriptor {
        category: Category::Steel,
        cost: |p| material_cost(&p.steel),
        carbon: |p| material_carbon(&p.steel),
        blend: BlendRule::Percentage(BlendSlot {
            get: |b| b.steel,
            get_mut: steel_slot,
        }),
    },
    CategoryDescriptor {
        category: Category::Copper,
        cost: |p| material_cost(&p.copper),
        carbon: |p| material_carbon(&p.copper),
        blend: BlendRule::Percentage(BlendSlot {
            get: |b| b.copper,
            get_mut: copper_slot,
        }),
    },
    CategoryDescriptor {
        category: Category::Aluminum,
        cost: |p| material_cost(&p.aluminum),
        carbon: |p| material_carbon(&p.aluminum),
        blend: BlendRule::Percentage(BlendSlot {
            get: |b| b.aluminum,
            get_mut: aluminum_slot,
        }),
    },
    CategoryDescriptor {
        category: Category::Asphalt,
        cost: |p| material_cost(&p.asphalt),
        carbon: |p| material_carbon(&p.asphalt),
        blend: BlendRule::Percentage(BlendSlot {
            get: |b| b.asphalt,
            get_mut: asphalt_slot,
        }),
    },
    CategoryDescriptor {
        category: Category::Freight,
        cost: freight_cost,
        carbon: freight_carbon,
        blend: BlendRule::FollowClassic,
    },
    CategoryDescriptor {
        category: Category::Personnel,
        cost: personnel_cost,
        carbon: personnel_carbon,
        blend: BlendRule::Percentage(BlendSlot {
            get: |b| b.personnel,
            get_mut: personnel_slot,
        }),
    },
    CategoryDescriptor {
        category: Category::Energy,
        cost: energy_cost,
        carbon: energy_carbon,
        blend: BlendRule::FollowClassic,
    },
    CategoryDescriptor {
        category: Category::Equipment,
        cost: |_| ScenarioPair::default(),
        carbon: |p| ScenarioPair::new(p.equipment.classic_tco2, p.equipment.eco_tco2),
        blend: BlendRule::FollowClassic,
    },
];

/// Descriptor for a category
pub fn descriptor(category: Category) -> &'static CategoryDescriptor {
    // table order follows Category declaration order
    &CATEGORY_TABLE[category as usize]
}

pub fn blendable_categories() -> impl Iterator<Item = Category> {
    CATEGORY_TABLE
        .iter()
        .filter(|d| d.blend.is_blendable())
        .map(|d| d.category)
}

fn material_cost(m: &crate::model::MaterialInputs) -> ScenarioPair {
    ScenarioPair::product(m.classic_quantity, m.classic_unit_price, m.eco_quantity, m.eco_unit_price)
}

fn material_carbon(m: &crate::model::MaterialInputs) -> ScenarioPair {
    ScenarioPair::product(m.classic_quantity, m.classic_factor, m.eco_quantity, m.eco_factor)
}

fn concrete_cost(p: &ProjectParameters) -> ScenarioPair {
    let c = &p.concrete;
    ScenarioPair::product(c.classic_volume_m3, c.classic_unit_price, c.eco_volume_m3, c.eco_unit_price)
}

fn concrete_carbon(p: &ProjectParameters) -> ScenarioPair {
    let c = &p.concrete;
    ScenarioPair::product(c.classic_volume_m3, c.classic_factor(), c.eco_volume_m3, c.eco_factor())
}

// Helicopter use does not depend on the design.
fn freight_cost(p: &ProjectParameters) -> ScenarioPair {
    let f = &p.freight;
    ScenarioPair::product(f.distance_km, f.classic_price_per_km, f.distance_km, f.eco_price_per_km)
        .plus_common(f.helicopter_hours * f.helicopter_hourly_rate)
}

fn freight_carbon(p: &ProjectParameters) -> ScenarioPair {
    let f = &p.freight;
    ScenarioPair::product(f.distance_km, f.classic_factor_per_km, f.distance_km, f.eco_factor_per_km)
        .plus_common(f.helicopter_hours * f.helicopter_factor_per_hour)
}

fn personnel_cost(p: &ProjectParameters) -> ScenarioPair {
    let t = &p.personnel;
    ScenarioPair::product(t.distance_km, t.classic_price_per_km, t.distance_km, t.eco_price_per_km)
}

fn personnel_carbon(p: &ProjectParameters) -> ScenarioPair {
    let t = &p.personnel;
    ScenarioPair::product(t.distance_km, t.classic_factor_per_km, t.distance_km, t.eco_factor_per_km)
}

fn energy_cost(p: &ProjectParameters) -> ScenarioPair {
    let classic = p.energy.consumption_kwh * p.energy.price_per_kwh;
    ScenarioPair::new(classic, classic * ECO_ENERGY_RATIO)
}

fn energy_carbon(p: &ProjectParameters) -> ScenarioPair {
    let classic = p.energy.consumption_kwh * p.energy.factor_per_kwh;
    ScenarioPair::new(classic, classic * ECO_ENERGY_RATIO)
}

fn concrete_slot(b: &mut BlendPercentages) -> &mut f64 {
    &mut b.concrete
}

fn steel_slot(b: &mut BlendPercentages) -> &mut f64 {
    &mut b.steel
}

fn copper_slot(b: &mut BlendPercentages) -> &mut f64 {
    &mut b.copper
}

fn aluminum_slot(b: &mut BlendPercentages) -> &mut f64 {
    &mut b.aluminum
}

fn asphalt_slot(b: &mut BlendPercentages) -> &mut f64 {
    &mut b.asphalt
}

fn personnel_slot(b: &mut BlendPercentages) -> &mut f64 {
    &mut b.personnel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ILLUSTRATIVE_PARAMETERS;

    #[test]
    fn test_table_follows_category_order() {
        for (idx, category) in Category::ALL.iter().enumerate() {
            assert_eq!(CATEGORY_TABLE[idx].category, *category);
            assert_eq!(descriptor(*category).category, *category);
        }
    }

    #[test]
    fn test_blendable_set() {
        let blendable: Vec<Category> = blendable_categories().collect();
        assert_eq!(
            blendable,
            vec![
                Category::Concrete,
                Category::Steel,
                Category::Copper,
                Category::Aluminum,
                Category::Asphalt,
                Category::Personnel,
            ]
        );
        assert!(!descriptor(Category::Freight).blend.is_blendable());
        assert!(!descriptor(Category::Energy).blend.is_blendable());
        assert!(!descriptor(Category::Equipment).blend.is_blendable());
    }

    #[test]
    fn test_slot_get_and_set_agree() {
        let mut blend = BlendPercentages::default();
        for (i, category) in blendable_categories().enumerate() {
            if let BlendRule::Percentage(slot) = descriptor(category).blend {
                *(slot.get_mut)(&mut blend) = i as f64 * 10.0;
                assert_eq!((slot.get)(&blend), i as f64 * 10.0);
            }
        }
        assert_eq!(blend.concrete, 0.0);
        assert_eq!(blend.personnel, 50.0);
    }

    #[test]
    fn test_helicopter_added_to_both_designs() {
        let mut params = ProjectParameters::default();
        params.freight.helicopter_hours = 4.0;
        params.freight.helicopter_hourly_rate = 1500.0;
        params.freight.helicopter_factor_per_hour = 0.5;
        let cost = freight_cost(&params);
        let carbon = freight_carbon(&params);
        assert_eq!(cost, ScenarioPair::new(6000.0, 6000.0));
        assert_eq!(carbon, ScenarioPair::new(2.0, 2.0));
    }

    #[test]
    fn test_energy_eco_is_reduced() {
        let cost = energy_cost(&ILLUSTRATIVE_PARAMETERS);
        // 20000 kWh x 0.25 = 5000
        assert!((cost.classic - 5000.0).abs() < 1e-9);
        assert!((cost.eco - 4000.0).abs() < 1e-9);
    }

    #[test]
    fn test_equipment_has_no_cost() {
        let d = descriptor(Category::Equipment);
        assert_eq!((d.cost)(&ILLUSTRATIVE_PARAMETERS), ScenarioPair::default());
        assert_eq!((d.carbon)(&ILLUSTRATIVE_PARAMETERS), ScenarioPair::new(10.0, 5.0));
    }
}
