// src/domain/crowdedness.rs

use std::collections::HashMap;

/// Percentage of occupied tables, rounded toward zero, always in [0, 100].
/// An absent or empty mapping counts as 0. Total over its domain; the
/// mapping is the single source of truth and nothing here is cached.
pub fn crowdedness_percent(table_status: Option<&HashMap<String, i64>>) -> u8 {
    let Some(status) = table_status else { return 0 };

    let total = status.len() as i64;
    if total == 0 {
        return 0;
    }

    let occupied = status.values().filter(|&&v| v == 1).count() as i64;
    (occupied * 100 / total) as u8
}

/// Qualitative band for a crowdedness percentage.
///
/// Boundaries are fixed: up to 30% is relaxed, up to 70% is moderate,
/// anything above is crowded. Used only for labeling and color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdednessTier {
    Relaxed,
    Moderate,
    Crowded,
}

impl CrowdednessTier {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0..=30 => CrowdednessTier::Relaxed,
            31..=70 => CrowdednessTier::Moderate,
            _ => CrowdednessTier::Crowded,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CrowdednessTier::Relaxed => "Relaxed",
            CrowdednessTier::Moderate => "Moderate",
            CrowdednessTier::Crowded => "Crowded",
        }
    }

    /// Hook for the stylesheet to pick the badge and ring color.
    pub fn css_class(self) -> &'static str {
        match self {
            CrowdednessTier::Relaxed => "tier-relaxed",
            CrowdednessTier::Moderate => "tier-moderate",
            CrowdednessTier::Crowded => "tier-crowded",
        }
    }
}
