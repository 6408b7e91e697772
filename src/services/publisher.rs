use chrono::NaiveDate;

use super::expiry::days_until_expiry;
use super::refresh::{RefreshAck, RefreshBus};
use crate::error::Result;
use crate::models::{FoodItem, WidgetEntry, MAX_ROWS};
use crate::storage::PreferenceWriter;

/// Pick the items worth showing: not yet expired, expiring within `window_days`,
/// soonest first, at most one per widget row.
pub fn select_widget_entries(
    items: &[FoodItem],
    today: NaiveDate,
    window_days: i64,
) -> Vec<WidgetEntry> {
    let mut entries: Vec<WidgetEntry> = items
        .iter()
        .filter_map(|item| {
            let days = days_until_expiry(Some(item.expiration_date.as_str()), today).upcoming()?;
            let days = i64::from(days);
            (days <= window_days).then(|| WidgetEntry::from_food_item(item, days))
        })
        .collect();

    // Stable, so items expiring the same day keep inventory order.
    entries.sort_by_key(|entry| entry.days_until_expiry);
    entries.truncate(MAX_ROWS);
    entries
}

/// Write the selected entries to shared storage, then ask the widget to refresh.
pub fn publish_widget_data(
    store: &dyn PreferenceWriter,
    bus: &RefreshBus,
    storage_key: &str,
    items: &[FoodItem],
    today: NaiveDate,
    window_days: i64,
) -> Result<(usize, RefreshAck)> {
    let entries = select_widget_entries(items, today, window_days);
    store.set(storage_key, &serde_json::to_string(&entries)?)?;
    log::debug!("Published {} widget item(s) of {}", entries.len(), items.len());
    Ok((entries.len(), bus.request_refresh()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::refresh::RefreshSignal;
    use crate::services::renderer::build_display_model;
    use crate::storage::{MemoryPreferences, PreferenceReader};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn food(name: &str, date: &str) -> FoodItem {
        FoodItem {
            id: name.to_string(),
            name: name.to_string(),
            quantity: 2.0,
            unit: "pcs".to_string(),
            expiration_date: date.to_string(),
            category: None,
        }
    }

    #[test]
    fn keeps_window_sorted_and_capped() {
        let items = vec![
            food("rice", "2024-06-01"),
            food("apples", "2024-05-15"),
            food("milk", "2024-05-10"),
            food("ham", "2024-05-09"),
            food("bread", "2024-05-12"),
            food("eggs", "2024-05-12"),
            food("cheese", "2024-05-17"),
            food("salsa", "2024-05-11"),
            food("tofu", "broken"),
        ];
        let entries = select_widget_entries(&items, today(), 7);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, ["milk", "salsa", "bread", "eggs", "apples"]);
        assert_eq!(entries[0].days_until_expiry, 0);
        assert_eq!(entries[0].quantity, "2 pcs");
    }

    #[test]
    fn window_end_is_inclusive() {
        let entries = select_widget_entries(&[food("cheese", "2024-05-17")], today(), 7);
        assert_eq!(entries.len(), 1);
        assert!(select_widget_entries(&[food("cheese", "2024-05-18")], today(), 7).is_empty());
    }

    #[tokio::test]
    async fn publish_writes_blob_the_renderer_reads() {
        let store = MemoryPreferences::new();
        let bus = RefreshBus::new();
        let mut signals = bus.subscribe();

        let (written, _) = publish_widget_data(
            &store,
            &bus,
            "expiringItems",
            &[food("yogurt", "2024-05-13"), food("kale", "2024-05-11")],
            today(),
            7,
        )
        .unwrap();

        assert_eq!(written, 2);
        assert_eq!(signals.recv().await.unwrap(), RefreshSignal::Requested);

        let blob = store.get("expiringItems").unwrap().unwrap();
        let model = build_display_model(&blob, today());
        assert_eq!(model.count, 2);
        assert_eq!(model.rows[0].name, "kale");
        assert_eq!(model.rows[1].badge_text, "3d");
    }
}
