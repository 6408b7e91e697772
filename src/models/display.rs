use serde::{Deserialize, Serialize};

/// Number of fixed row slots in the widget layout.
pub const MAX_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyTier {
    Critical,
    Warning,
    Ok,
}

impl UrgencyTier {
    pub fn for_days(days: u32) -> Self {
        match days {
            0..=1 => UrgencyTier::Critical,
            2..=3 => UrgencyTier::Warning,
            _ => UrgencyTier::Ok,
        }
    }

    pub fn style(self) -> UrgencyStyle {
        match self {
            UrgencyTier::Critical => UrgencyStyle {
                dot_color: "#C85A17",
                badge_background: "widget_badge_red",
                badge_text_color: "#C85A17",
            },
            UrgencyTier::Warning => UrgencyStyle {
                dot_color: "#D4A440",
                badge_background: "widget_badge_amber",
                badge_text_color: "#B8860B",
            },
            UrgencyTier::Ok => UrgencyStyle {
                dot_color: "#2D8A78",
                badge_background: "widget_badge_bg",
                badge_text_color: "#2D8A78",
            },
        }
    }
}

/// Presentation constants for a tier: dot color, badge drawable and badge text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyStyle {
    pub dot_color: &'static str,
    pub badge_background: &'static str,
    pub badge_text_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Urgency {
    pub tier: UrgencyTier,
    pub badge_text: String,
    pub style: UrgencyStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub name: String,
    pub days_until_expiry: u32,
    pub badge_text: String,
    pub urgency_tier: UrgencyTier,
    pub style: UrgencyStyle,
}

/// Everything one render pass hands to the view.
///
/// `count` is the number of stored items, which can exceed the visible rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    pub count: usize,
    pub rows: Vec<DisplayRow>,
    pub show_empty: bool,
}

impl DisplayModel {
    pub fn empty() -> Self {
        Self {
            count: 0,
            rows: Vec::new(),
            show_empty: true,
        }
    }
}

/// Where a tap on the widget sends the user inside the host app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetTarget {
    #[default]
    Inventory,
    Capture,
}

impl WidgetTarget {
    pub fn route(self) -> &'static str {
        match self {
            WidgetTarget::Inventory => "/inventory",
            WidgetTarget::Capture => "/capture",
        }
    }
}
