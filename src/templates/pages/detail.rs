// templates/pages/detail.rs

use crate::domain::{crowdedness_percent, Cafe, CrowdednessTier, SeatSummary};
use crate::templates::{card, crowdedness_badge, desktop_layout, seat_grid};
use maud::{html, Markup};

pub fn detail_page(cafe: &Cafe) -> Markup {
    desktop_layout(
        &cafe.cafe_name,
        html! {
            main class="container" {
                h1 {
                    (cafe.cafe_name)
                    @if cafe.is_test() {
                        " " span class="badge badge-test" { "TEST" }
                    }
                }
                p class="address" { (cafe.cafe_address) }
                @if let Some(phone) = &cafe.phone {
                    p class="phone" { "Phone: " (phone) }
                }
                @if let Some(url) = &cafe.place_url {
                    p { a href=(url) { "View on map" } }
                }

                @match &cafe.table_status {
                    Some(status) => (seat_section(status)),
                    None => (card("Seats", html! {
                        p { "No live seat data for this cafe." }
                    })),
                }
            }
        },
    )
}

fn seat_section(status: &std::collections::HashMap<String, i64>) -> Markup {
    let summary = SeatSummary::from_status(status);
    let percent = crowdedness_percent(Some(status));
    let tier = CrowdednessTier::from_percent(percent);

    html! {
        (card("Crowdedness", html! {
            p { (crowdedness_badge(percent, tier)) }
            p class="available" { "Available seats: " strong { (summary.available) } " of " (summary.total) }
        }))

        (card("Seats", seat_grid(&summary)))
    }
}
