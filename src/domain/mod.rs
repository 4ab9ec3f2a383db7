pub mod cafe;
pub mod crowdedness;
pub mod seating;

pub use cafe::{merge_unique, Cafe};
pub use crowdedness::{crowdedness_percent, CrowdednessTier};
pub use seating::SeatSummary;
