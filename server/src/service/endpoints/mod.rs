//! Endpoint handlers organized by route

pub mod assets;
pub mod health;
pub mod save_data;

pub use assets::{asset_service, not_found};
pub use health::health;
pub use save_data::save_data;
