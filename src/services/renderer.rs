use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::expiry::{classify_urgency, days_until_expiry};
use crate::models::{DisplayModel, DisplayRow, InventoryItem, MAX_ROWS};

/// Turn the stored item blob into what the widget shows.
///
/// Only the first [`MAX_ROWS`] entries are considered and their stored order is kept.
/// Entries that cannot be shown are skipped one by one; a blob that is not a JSON
/// array yields the empty state.
pub fn build_display_model(items_json: &str, today: NaiveDate) -> DisplayModel {
    let items: Vec<Value> = match serde_json::from_str(items_json) {
        Ok(items) => items,
        Err(e) => {
            log::debug!("Widget items are not a JSON array, rendering empty state: {}", e);
            return DisplayModel::empty();
        }
    };

    let rows = items
        .iter()
        .take(MAX_ROWS)
        .filter_map(|raw| display_row(raw, today))
        .collect();

    DisplayModel {
        count: items.len(),
        rows,
        show_empty: items.is_empty(),
    }
}

fn display_row(raw: &Value, today: NaiveDate) -> Option<DisplayRow> {
    let item = match InventoryItem::deserialize(raw) {
        Ok(item) => item,
        Err(e) => {
            log::debug!("Skipping malformed widget item: {}", e);
            return None;
        }
    };

    let days = days_until_expiry(item.expiration_date.as_deref(), today).upcoming()?;
    let urgency = classify_urgency(days);

    Some(DisplayRow {
        name: item.name,
        days_until_expiry: days,
        badge_text: urgency.badge_text,
        urgency_tier: urgency.tier,
        style: urgency.style,
    })
}
