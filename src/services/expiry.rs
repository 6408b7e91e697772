use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{Urgency, UrgencyTier};

/// Days between today and an item's expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Missing, empty or not a calendar date.
    Invalid,
    /// Whole calendar days from today; negative once the date has passed.
    Days(i64),
}

impl Expiry {
    /// Day count for items that have not expired yet.
    pub fn upcoming(self) -> Option<u32> {
        match self {
            Expiry::Days(days) if days >= 0 => u32::try_from(days).ok(),
            _ => None,
        }
    }

    /// Integer form used by the native widget, where `-1` stands for "unusable".
    pub fn legacy_days(self) -> i64 {
        match self {
            Expiry::Invalid => -1,
            Expiry::Days(days) => days,
        }
    }
}

fn date_prefix() -> &'static Regex {
    static DATE_PREFIX: OnceLock<Regex> = OnceLock::new();
    DATE_PREFIX.get_or_init(|| {
        Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:[T ].*)?$").expect("date pattern is valid")
    })
}

/// Parse `YYYY-MM-DD`. A trailing time of day is tolerated and dropped.
pub fn parse_expiry_date(date_str: &str) -> Option<NaiveDate> {
    let captures = date_prefix().captures(date_str.trim())?;
    NaiveDate::parse_from_str(captures.get(1)?.as_str(), "%Y-%m-%d").ok()
}

pub fn days_until_expiry(date_str: Option<&str>, today: NaiveDate) -> Expiry {
    match date_str.and_then(parse_expiry_date) {
        Some(expiry) => Expiry::Days((expiry - today).num_days()),
        None => Expiry::Invalid,
    }
}

pub fn badge_text(days: u32) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "1 day".to_string(),
        n => format!("{}d", n),
    }
}

pub fn classify_urgency(days: u32) -> Urgency {
    let tier = UrgencyTier::for_days(days);
    Urgency {
        tier,
        badge_text: badge_text(days),
        style: tier.style(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }

    #[test]
    fn today_is_zero_days() {
        assert_eq!(days_until_expiry(Some("2024-02-27"), today()), Expiry::Days(0));
    }

    #[test]
    fn future_dates_count_whole_days() {
        for n in 0..=365 {
            let target = today() + Duration::days(n);
            let date_str = target.format("%Y-%m-%d").to_string();
            assert_eq!(days_until_expiry(Some(&date_str), today()), Expiry::Days(n));
        }
    }

    #[test]
    fn crosses_leap_day() {
        assert_eq!(days_until_expiry(Some("2024-03-01"), today()), Expiry::Days(3));
    }

    #[test]
    fn past_dates_are_negative_but_valid() {
        let expiry = days_until_expiry(Some("2024-02-26"), today());
        assert_eq!(expiry, Expiry::Days(-1));
        assert_eq!(expiry.upcoming(), None);
    }

    #[test]
    fn unusable_dates_are_invalid() {
        let inputs = [
            None,
            Some(""),
            Some("   "),
            Some("tomorrow"),
            Some("2024-13-01"),
            Some("2023-02-29"),
            Some("2024-2-28"),
            Some("28/02/2024"),
        ];
        for input in inputs {
            let expiry = days_until_expiry(input, today());
            assert_eq!(expiry, Expiry::Invalid, "input {:?}", input);
            assert_eq!(expiry.legacy_days(), -1);
        }
    }

    #[test]
    fn time_of_day_suffix_is_ignored() {
        assert_eq!(
            days_until_expiry(Some("2024-02-29T23:59:59.000Z"), today()),
            Expiry::Days(2)
        );
    }

    #[test]
    fn urgency_tiers() {
        assert_eq!(classify_urgency(0).tier, UrgencyTier::Critical);
        assert_eq!(classify_urgency(1).tier, UrgencyTier::Critical);
        assert_eq!(classify_urgency(2).tier, UrgencyTier::Warning);
        assert_eq!(classify_urgency(3).tier, UrgencyTier::Warning);
        assert_eq!(classify_urgency(4).tier, UrgencyTier::Ok);
        assert_eq!(classify_urgency(30).tier, UrgencyTier::Ok);
    }

    #[test]
    fn badge_labels() {
        assert_eq!(classify_urgency(0).badge_text, "Today");
        assert_eq!(classify_urgency(1).badge_text, "1 day");
        assert_eq!(classify_urgency(5).badge_text, "5d");
    }

    #[test]
    fn critical_uses_red_badge() {
        let urgency = classify_urgency(1);
        assert_eq!(urgency.style.badge_background, "widget_badge_red");
        assert_eq!(urgency.style.dot_color, "#C85A17");
    }
}
