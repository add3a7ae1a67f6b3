use serde::{Deserialize, Serialize};

/// A lendable item as listed by `GET /api/inventory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub quantity_total: u32,
    pub quantity_available: u32,
    #[serde(default)]
    pub location: Option<String>,
}

impl InventoryItem {
    pub fn is_available(&self) -> bool {
        self.quantity_available > 0
    }

    /// Case-insensitive match against name, category and location.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self
                .location
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(available: u32) -> InventoryItem {
        InventoryItem {
            id: "i1".into(),
            name: "Beamer Epson".into(),
            description: None,
            category: "Präsentation".into(),
            quantity_total: 3,
            quantity_available: available,
            location: Some("Raum 2.14".into()),
        }
    }

    #[test]
    fn test_is_available() {
        assert!(item(1).is_available());
        assert!(!item(0).is_available());
    }

    #[test]
    fn test_matches() {
        let it = item(1);
        assert!(it.matches(""));
        assert!(it.matches("beamer"));
        assert!(it.matches("PRÄSENTATION"));
        assert!(it.matches("2.14"));
        assert!(!it.matches("laptop"));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id":"x","name":"Kabel","category":"IT","quantity_total":5,"quantity_available":5}"#;
        let it: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(it.location, None);
        assert_eq!(it.description, None);
    }
}
