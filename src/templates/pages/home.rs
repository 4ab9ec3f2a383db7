// templates/pages/home.rs

use crate::domain::{crowdedness_percent, CrowdednessTier};
use crate::store::FeedState;
use crate::templates::{crowdedness_badge, desktop_layout};
use maud::{html, Markup};

/// Fixed notice for any fetch failure; variants only reach the logs.
pub const FETCH_FAILED_NOTICE: &str = "Failed to load cafe data.";

pub fn home_page(state: &FeedState) -> Markup {
    desktop_layout(
        "Cafes",
        html! {
            main class="container" {
                h1 { "Cafes" }

                @if state.fetch_failed {
                    p class="notice error" { (FETCH_FAILED_NOTICE) }
                }

                @if let Some(at) = state.fetched_at {
                    p class="fetched-at" { "Last updated " (at.format("%Y-%m-%d %H:%M UTC")) }
                }

                form action="/refresh" method="post" {
                    button type="submit" { "Refresh" }
                }

                @if state.cafes.is_empty() {
                    p { "No cafes to show." }
                } @else {
                    ul class="cafe-list" {
                        @for cafe in &state.cafes {
                            li class="cafe-row" {
                                a href=(format!("/cafes/{}", cafe.cafe_id)) {
                                    strong { (cafe.cafe_name) }
                                }
                                @if cafe.is_test() {
                                    span class="badge badge-test" { "TEST" }
                                }
                                (cafe_badge(cafe.table_status.as_ref()))
                                p class="address" { (cafe.cafe_address) }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn cafe_badge(
    table_status: Option<&std::collections::HashMap<String, i64>>,
) -> Markup {
    let percent = crowdedness_percent(table_status);
    crowdedness_badge(percent, CrowdednessTier::from_percent(percent))
}
