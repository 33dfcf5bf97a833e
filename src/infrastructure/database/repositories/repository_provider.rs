//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::pizza::PizzaRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::restaurant::RestaurantRepository;
use crate::domain::restaurant_pizza::RestaurantPizzaRepository;

use super::pizza_repository::SeaOrmPizzaRepository;
use super::restaurant_pizza_repository::SeaOrmRestaurantPizzaRepository;
use super::restaurant_repository::SeaOrmRestaurantRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let restaurant = repos.restaurants().find_with_pizzas(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    restaurants: SeaOrmRestaurantRepository,
    pizzas: SeaOrmPizzaRepository,
    restaurant_pizzas: SeaOrmRestaurantPizzaRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            restaurants: SeaOrmRestaurantRepository::new(db.clone()),
            pizzas: SeaOrmPizzaRepository::new(db.clone()),
            restaurant_pizzas: SeaOrmRestaurantPizzaRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn restaurants(&self) -> &dyn RestaurantRepository {
        &self.restaurants
    }

    fn pizzas(&self) -> &dyn PizzaRepository {
        &self.pizzas
    }

    fn restaurant_pizzas(&self) -> &dyn RestaurantPizzaRepository {
        &self.restaurant_pizzas
    }
}
