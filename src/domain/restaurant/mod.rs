//! Restaurant aggregate
//!
//! A restaurant owns the priced pizza offerings listed on its menu.

pub mod model;
pub mod repository;

pub use model::{NewRestaurant, Restaurant, RestaurantWithPizzas};
pub use repository::RestaurantRepository;
