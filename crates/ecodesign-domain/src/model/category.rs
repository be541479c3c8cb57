//! Material and logistics categories

use serde::{Deserialize, Serialize};

/// A line of the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Concrete,
    Steel,
    Copper,
    Aluminum,
    Asphalt,
    Freight,
    Personnel,
    Energy,
    Equipment,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Concrete,
        Category::Steel,
        Category::Copper,
        Category::Aluminum,
        Category::Asphalt,
        Category::Freight,
        Category::Personnel,
        Category::Energy,
        Category::Equipment,
    ];

    /// Stable key used in files and suggestion payloads
    pub fn key(&self) -> &'static str {
        match self {
            Category::Concrete => "concrete",
            Category::Steel => "steel",
            Category::Copper => "copper",
            Category::Aluminum => "aluminum",
            Category::Asphalt => "asphalt",
            Category::Freight => "freight",
            Category::Personnel => "personnel",
            Category::Energy => "energy",
            Category::Equipment => "equipment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Concrete => "Concrete",
            Category::Steel => "Steel",
            Category::Copper => "Copper",
            Category::Aluminum => "Aluminium",
            Category::Asphalt => "Asphalt",
            Category::Freight => "Freight transport",
            Category::Personnel => "Personnel travel",
            Category::Energy => "Site energy",
            Category::Equipment => "Equipment",
        }
    }

    /// Case-insensitive lookup by key.
    ///
    /// Also accepts "aluminium" and the `pctEco*` percentage names used by
    /// the external optimizer (`pctEcoBeton`, `pctEcoDeplacements`, ...).
    pub fn from_key(key: &str) -> Option<Category> {
        let key = key.trim().to_lowercase();
        let alias = match key.as_str() {
            "aluminium" | "pctecoaluminium" => Some(Category::Aluminum),
            "pctecobeton" => Some(Category::Concrete),
            "pctecoacier" => Some(Category::Steel),
            "pctecocuivre" => Some(Category::Copper),
            "pctecoenrobes" => Some(Category::Asphalt),
            "pctecodeplacements" => Some(Category::Personnel),
            _ => None,
        };
        alias.or_else(|| Category::ALL.iter().copied().find(|c| c.key() == key))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn test_from_key_is_lenient() {
        assert_eq!(Category::from_key(" Concrete "), Some(Category::Concrete));
        assert_eq!(Category::from_key("ALUMINIUM"), Some(Category::Aluminum));
        assert_eq!(Category::from_key("timber"), None);
    }

    #[test]
    fn test_from_key_accepts_optimizer_percentage_names() {
        assert_eq!(Category::from_key("pctEcoBeton"), Some(Category::Concrete));
        assert_eq!(Category::from_key("pctEcoAcier"), Some(Category::Steel));
        assert_eq!(Category::from_key("pctEcoCuivre"), Some(Category::Copper));
        assert_eq!(Category::from_key("pctEcoAluminium"), Some(Category::Aluminum));
        assert_eq!(Category::from_key("pctEcoEnrobes"), Some(Category::Asphalt));
        assert_eq!(Category::from_key("pctEcoDeplacements"), Some(Category::Personnel));
        assert_eq!(Category::from_key("pctEcoEnergie"), None);
    }

    #[test]
    fn test_serde_key_matches() {
        let json = serde_json::to_string(&Category::Personnel).unwrap();
        assert_eq!(json, "\"personnel\"");
    }
}
