//! Application layer: commands and the services that run them.

pub mod commands;
pub mod services;

pub use commands::{CreateRestaurantPizza, IntegerInput};
pub use services::{PizzaService, RestaurantPizzaService, RestaurantService};
