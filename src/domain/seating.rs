// src/domain/seating.rs

use std::collections::HashMap;

/// Aggregated view of a cafe's seat mapping, ready for stable rendering.
/// Pure transformation of the mapping; nothing here is stored back.
#[derive(Debug, PartialEq, Eq)]
pub struct SeatSummary {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
    /// (table id, occupied) pairs sorted lexicographically by table id,
    /// so render order never depends on hash iteration order.
    pub seats: Vec<(String, bool)>,
}

impl SeatSummary {
    pub fn from_status(status: &HashMap<String, i64>) -> Self {
        let mut seats: Vec<(String, bool)> = status
            .iter()
            .map(|(id, &flag)| (id.clone(), flag == 1))
            .collect();
        seats.sort_by(|a, b| a.0.cmp(&b.0));

        let total = seats.len();
        let occupied = seats.iter().filter(|(_, taken)| *taken).count();

        SeatSummary {
            total,
            occupied,
            available: total - occupied,
            seats,
        }
    }
}
