//! Data Model
//!
//! Shared shopping-list data structures. `SharedDocument` is exactly what is
//! mirrored to the cloud document; everything else is session-local.

use serde::{Deserialize, Serialize};

/// One of the two fixed sites, each with its own shopping list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationId {
    #[serde(rename = "slowlife1")]
    Site1,
    #[serde(rename = "slowlife2")]
    Site2,
}

impl LocationId {
    pub const ALL: [LocationId; 2] = [LocationId::Site1, LocationId::Site2];

    /// Display name shown in the selector and the list header
    pub fn label(self) -> &'static str {
        match self {
            LocationId::Site1 => "すろーらいふ 1",
            LocationId::Site2 => "すろーらいふ 2",
        }
    }

    /// Short caption shown above the display name
    pub fn caption(self) -> &'static str {
        match self {
            LocationId::Site1 => "拠点１",
            LocationId::Site2 => "拠点２",
        }
    }

    /// Accent color for this site's screens
    pub fn theme_color(self) -> &'static str {
        match self {
            LocationId::Site1 => "#8dad82",
            LocationId::Site2 => "#d4a373",
        }
    }
}

/// Default card color (first palette entry)
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Fixed card color palette: (value, label)
pub const COLORS: [(&str, &str); 4] = [
    ("#ffffff", "標準"),
    ("#ffecf0", "さくら"),
    ("#e3f2fd", "そら"),
    ("#f1f8e9", "わかば"),
];

/// One entry on a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Opaque unique id (UUID v4)
    pub id: String,
    pub name: String,
    pub completed: bool,
    /// Creation time in milliseconds since the epoch
    pub created_at: f64,
    /// Card color, one of [`COLORS`]
    pub color: String,
    /// Free-text amount ("2個", "200g", ...); empty = unset
    #[serde(default)]
    pub quantity: String,
}

/// One entry of the purchase-history ledger; `name` is the key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub name: String,
    pub color: String,
}

/// The per-site item lists. The key set is closed: exactly one list per
/// [`LocationId`], never added to or removed from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lists {
    #[serde(default, rename = "slowlife1")]
    pub site1: Vec<ShoppingItem>,
    #[serde(default, rename = "slowlife2")]
    pub site2: Vec<ShoppingItem>,
}

impl Lists {
    pub fn get(&self, id: LocationId) -> &[ShoppingItem] {
        match id {
            LocationId::Site1 => &self.site1,
            LocationId::Site2 => &self.site2,
        }
    }

    pub fn get_mut(&mut self, id: LocationId) -> &mut Vec<ShoppingItem> {
        match id {
            LocationId::Site1 => &mut self.site1,
            LocationId::Site2 => &mut self.site2,
        }
    }
}

/// The document mirrored to the cloud store: everything shared between
/// clients. The session-local current location is deliberately not part of
/// this struct, so it can never leak into a write.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedDocument {
    #[serde(default)]
    pub lists: Lists,
    #[serde(default)]
    pub master_history: Vec<HistoryItem>,
}

/// Arguments for adding one item to the current list
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub color: String,
    pub quantity: String,
}

impl Default for NewItem {
    fn default() -> Self {
        NewItem {
            name: String::new(),
            color: DEFAULT_COLOR.to_string(),
            quantity: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> SharedDocument {
        SharedDocument {
            lists: Lists {
                site1: vec![ShoppingItem {
                    id: "a-1".to_string(),
                    name: "牛乳".to_string(),
                    completed: false,
                    created_at: 1_700_000_000_000.0,
                    color: "#ffecf0".to_string(),
                    quantity: "2本".to_string(),
                }],
                site2: vec![],
            },
            master_history: vec![HistoryItem {
                name: "牛乳".to_string(),
                color: "#ffecf0".to_string(),
            }],
        }
    }

    #[test]
    fn test_document_round_trip() {
        let doc = sample_document();
        let json = serde_json::to_string(&doc).unwrap();
        let back: SharedDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample_document()).unwrap();
        assert!(value.get("masterHistory").is_some());
        assert!(value["lists"].get("slowlife1").is_some());
        assert!(value["lists"].get("slowlife2").is_some());
        assert!(value["lists"]["slowlife1"][0].get("createdAt").is_some());
        // The current location is navigation state, never serialized
        assert!(value.get("currentLocation").is_none());
    }

    #[test]
    fn test_item_without_quantity_deserializes() {
        let json = r##"{"id":"x","name":"パン","completed":true,"createdAt":0.0,"color":"#ffffff"}"##;
        let item: ShoppingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, "");
        assert!(item.completed);
    }

    #[test]
    fn test_empty_document_deserializes() {
        let doc: SharedDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.lists.site1.is_empty());
        assert!(doc.lists.site2.is_empty());
        assert!(doc.master_history.is_empty());
    }

    #[test]
    fn test_location_serialization() {
        assert_eq!(serde_json::to_string(&LocationId::Site1).unwrap(), "\"slowlife1\"");
        assert_eq!(serde_json::to_string(&LocationId::Site2).unwrap(), "\"slowlife2\"");
    }
}
