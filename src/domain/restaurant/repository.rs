//! Restaurant repository interface

use async_trait::async_trait;

use super::model::{NewRestaurant, Restaurant, RestaurantWithPizzas};
use crate::domain::DomainResult;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Every restaurant, ordered by id.
    async fn find_all(&self) -> DomainResult<Vec<Restaurant>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Restaurant>>;

    /// Restaurant with its offerings, each offering carrying its pizza.
    async fn find_with_pizzas(&self, id: i32) -> DomainResult<Option<RestaurantWithPizzas>>;

    async fn save(&self, restaurant: NewRestaurant) -> DomainResult<Restaurant>;

    /// Deletes the restaurant and every offering referencing it in one
    /// transaction. Fails with `NotFound` when the id is unknown.
    async fn delete(&self, id: i32) -> DomainResult<()>;

    async fn count(&self) -> DomainResult<u64>;
}
