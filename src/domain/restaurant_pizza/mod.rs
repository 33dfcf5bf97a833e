//! Restaurant pizza aggregate
//!
//! A restaurant pizza is the priced link between one restaurant and one pizza.

pub mod model;
pub mod repository;

pub use model::{
    NewRestaurantPizza, PizzaOffering, RestaurantPizza, RestaurantPizzaDetails,
    MAX_PRICE, MIN_PRICE,
};
pub use repository::RestaurantPizzaRepository;
