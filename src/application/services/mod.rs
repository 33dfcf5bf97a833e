//! Application services
//!
//! HTTP handlers are thin wrappers that delegate here.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::PizzaService;
pub use restaurant::RestaurantService;
pub use restaurant_pizza::RestaurantPizzaService;
