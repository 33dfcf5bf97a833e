//! Domain layer: entities, repository interfaces and errors.

pub mod error;
pub mod pizza;
pub mod repositories;
pub mod restaurant;
pub mod restaurant_pizza;

pub use error::{DomainError, DomainResult};
pub use pizza::{NewPizza, Pizza, PizzaRepository};
pub use repositories::RepositoryProvider;
pub use restaurant::{NewRestaurant, Restaurant, RestaurantRepository, RestaurantWithPizzas};
pub use restaurant_pizza::{
    NewRestaurantPizza, PizzaOffering, RestaurantPizza, RestaurantPizzaDetails,
    RestaurantPizzaRepository, MAX_PRICE, MIN_PRICE,
};
