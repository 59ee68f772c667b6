pub mod activity;
pub mod bookings;
pub mod distances;
pub mod previews;
pub mod quotes;
pub mod rentals;
pub mod settlements;
pub mod validations;
