//! Restaurant queries and deletion

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DomainError, DomainResult, RepositoryProvider, Restaurant, RestaurantWithPizzas,
};

pub struct RestaurantService {
    repos: Arc<dyn RepositoryProvider>,
}

impl RestaurantService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_restaurants(&self) -> DomainResult<Vec<Restaurant>> {
        self.repos.restaurants().find_all().await
    }

    /// Ids beyond the key range cannot name a row and are not found.
    pub async fn get_restaurant(&self, id: i64) -> DomainResult<RestaurantWithPizzas> {
        let key = restaurant_key(id)?;
        self.repos
            .restaurants()
            .find_with_pizzas(key)
            .await?
            .ok_or_else(|| DomainError::not_found("Restaurant", id))
    }

    /// Removes the restaurant and its restaurant pizzas. Pizzas stay.
    pub async fn delete_restaurant(&self, id: i64) -> DomainResult<()> {
        self.repos.restaurants().delete(restaurant_key(id)?).await?;
        info!("Restaurant {} deleted", id);
        Ok(())
    }
}

fn restaurant_key(id: i64) -> DomainResult<i32> {
    i32::try_from(id).map_err(|_| DomainError::not_found("Restaurant", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewRestaurant;
    use crate::test_support::{memory_db, repos};

    async fn service() -> (RestaurantService, Arc<dyn RepositoryProvider>) {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(repos(memory_db().await));
        (RestaurantService::new(repos.clone()), repos)
    }

    #[tokio::test]
    async fn get_and_delete_unknown_restaurant() {
        let (service, _) = service().await;

        for id in [0, 1, 42, -1] {
            assert_eq!(
                service.get_restaurant(id).await.unwrap_err(),
                DomainError::not_found("Restaurant", id)
            );
            assert_eq!(
                service.delete_restaurant(id).await.unwrap_err(),
                DomainError::not_found("Restaurant", id)
            );
        }
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, repos) = service().await;
        let r = repos
            .restaurants()
            .save(NewRestaurant::new("Dominion", "Main St"))
            .await
            .unwrap();

        assert_eq!(service.get_restaurant(r.id.into()).await.unwrap().restaurant, r);
        service.delete_restaurant(r.id.into()).await.unwrap();
        assert!(matches!(
            service.get_restaurant(r.id.into()).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(service.list_restaurants().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_beyond_the_key_range_are_not_found() {
        let (service, _) = service().await;

        for id in [i64::from(i32::MAX) + 1, 3_000_000_000, i64::from(i32::MIN) - 1, i64::MAX] {
            assert_eq!(
                service.get_restaurant(id).await.unwrap_err(),
                DomainError::not_found("Restaurant", id)
            );
            assert_eq!(
                service.delete_restaurant(id).await.unwrap_err(),
                DomainError::not_found("Restaurant", id)
            );
        }
    }
}
