//! Restaurant pizza repository interface

use async_trait::async_trait;

use super::model::{NewRestaurantPizza, RestaurantPizza, RestaurantPizzaDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait RestaurantPizzaRepository: Send + Sync {
    /// Persists a new link in one transaction.
    ///
    /// Fails with `NotFound` when either end is missing and with
    /// `ConstraintViolation` when the price is not positive, whatever the
    /// caller validated beforehand.
    async fn create(&self, new: NewRestaurantPizza) -> DomainResult<RestaurantPizzaDetails>;

    async fn find_by_restaurant(&self, restaurant_id: i32) -> DomainResult<Vec<RestaurantPizza>>;

    async fn count(&self) -> DomainResult<u64>;
}
