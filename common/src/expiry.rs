use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Records at most this many days out are "Expiring Soon".
pub const CRITICAL_WINDOW_DAYS: i64 = 30;
/// Records at most this many days out (past the critical window) are "Good".
pub const MONITOR_WINDOW_DAYS: i64 = 90;
/// Cutoff for the needs-action flag. Independent of the category windows.
pub const ACTION_WINDOW_DAYS: i64 = 15;

/// Signed whole days from `today` to `expiry`. Negative once the date has passed.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// The calendar date `days` whole days after `today` (negative values go back).
pub fn date_after_days(today: NaiveDate, days: i64) -> NaiveDate {
    today + Duration::days(days)
}

/// Human label for a time-left cell: "{n} days left", or "Expired" once negative.
pub fn format_days_label(days: i64) -> String {
    if days < 0 {
        "Expired".to_string()
    } else {
        format!("{days} days left")
    }
}

/// Status tier assigned to a record from its days-until-expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    Expired,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Good,
    Great,
}

impl StatusCategory {
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Expired => "Expired",
            StatusCategory::ExpiringSoon => "Expiring Soon",
            StatusCategory::Good => "Good",
            StatusCategory::Great => "Great",
        }
    }

    /// Call-to-action line shown alongside the tier.
    pub fn message(&self) -> &'static str {
        match self {
            StatusCategory::Expired => "Expired",
            StatusCategory::ExpiringSoon => "Critical Action Required",
            StatusCategory::Good => "Monitor",
            StatusCategory::Great => "Good Standing!",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            StatusCategory::Expired => Severity::Expired,
            StatusCategory::ExpiringSoon => Severity::Critical,
            StatusCategory::Good => Severity::Monitor,
            StatusCategory::Great => Severity::Good,
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display severity of a tier, used as a styling hook by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Expired,
    Critical,
    Monitor,
    Good,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Expired => "expired",
            Severity::Critical => "critical",
            Severity::Monitor => "monitor",
            Severity::Good => "good",
        }
    }

    /// Stylesheet class names the web view keys row styling off.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Expired => "status-expired",
            Severity::Critical => "status-critical",
            Severity::Monitor => "status-monitor",
            Severity::Good => "status-good",
        }
    }
}

/// Map days-until-expiry onto its status tier.
///
/// The four ranges partition every integer: `< 0`, `0..=30`, `31..=90`, `> 90`.
pub fn classify(days: i64) -> StatusCategory {
    if days < 0 {
        StatusCategory::Expired
    } else if days <= CRITICAL_WINDOW_DAYS {
        StatusCategory::ExpiringSoon
    } else if days <= MONITOR_WINDOW_DAYS {
        StatusCategory::Good
    } else {
        StatusCategory::Great
    }
}

/// Whether a record needs attention right now. Uses its own cutoff, not the
/// category windows, and is true for already-expired records.
pub fn needs_immediate_action(days: i64) -> bool {
    days <= ACTION_WINDOW_DAYS
}
