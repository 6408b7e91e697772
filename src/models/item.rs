use serde::{Deserialize, Serialize};

/// One record of the stored expiring-items blob, as the widget reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

/// Inventory item as the app's scripting layer hands it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Record written to shared storage for the widget to pick up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetEntry {
    pub name: String,
    pub expiration_date: String,
    pub days_until_expiry: i64,
    pub quantity: String,
}

impl WidgetEntry {
    pub fn from_food_item(item: &FoodItem, days_until_expiry: i64) -> Self {
        Self {
            name: item.name.clone(),
            expiration_date: item.expiration_date.clone(),
            days_until_expiry,
            quantity: format!("{} {}", item.quantity, item.unit),
        }
    }
}
