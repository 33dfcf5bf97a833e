//! Pizza repository interface

use async_trait::async_trait;

use super::model::{NewPizza, Pizza};
use crate::domain::DomainResult;

#[async_trait]
pub trait PizzaRepository: Send + Sync {
    /// Every pizza, ordered by id.
    async fn find_all(&self) -> DomainResult<Vec<Pizza>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pizza>>;
    async fn save(&self, pizza: NewPizza) -> DomainResult<Pizza>;
    async fn count(&self) -> DomainResult<u64>;
}
