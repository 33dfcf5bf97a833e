//! Repository provider for the domain layer
//!
//! Consumers request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let restaurant = repos.restaurants().find_by_id(1).await?;
//!     let pizzas = repos.pizzas().find_all().await?;
//! }
//! ```

use super::pizza::PizzaRepository;
use super::restaurant::RestaurantRepository;
use super::restaurant_pizza::RestaurantPizzaRepository;

/// Provides access to all domain repositories.
pub trait RepositoryProvider: Send + Sync {
    fn restaurants(&self) -> &dyn RestaurantRepository;
    fn pizzas(&self) -> &dyn PizzaRepository;
    fn restaurant_pizzas(&self) -> &dyn RestaurantPizzaRepository;
}
