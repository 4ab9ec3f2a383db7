use crate::domain::CrowdednessTier;
use maud::{html, Markup};

/// Percentage + tier label, color-coded through the tier's CSS class.
pub fn crowdedness_badge(percent: u8, tier: CrowdednessTier) -> Markup {
    html! {
        span class=(format!("badge {}", tier.css_class())) {
            strong { (percent) "%" }
            " · "
            (tier.label())
        }
    }
}
