//! Database entities module

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::Entity as Pizza;
pub use restaurant::Entity as Restaurant;
pub use restaurant_pizza::Entity as RestaurantPizza;
