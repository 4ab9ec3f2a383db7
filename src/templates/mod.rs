pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, crowdedness_badge, seat_grid};
pub use layouts::desktop::desktop_layout;
