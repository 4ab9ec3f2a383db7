use crate::domain::SeatSummary;
use maud::{html, Markup};

/// Seat grid in stable (sorted) order, one tile per table.
pub fn seat_grid(summary: &SeatSummary) -> Markup {
    html! {
        div class="seat-grid" {
            @for (table_id, occupied) in &summary.seats {
                div class=(if *occupied { "seat occupied" } else { "seat free" }) {
                    span class="seat-id" { (table_id) }
                    span class="seat-state" {
                        @if *occupied { "Occupied" } @else { "Free" }
                    }
                }
            }
        }
    }
}
