pub mod badge;
pub mod card;
pub mod seats;

pub use badge::crowdedness_badge;
pub use card::card;
pub use seats::seat_grid;
