//! Restaurant pizza creation

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::commands::{CreateRestaurantPizza, IntegerInput};
use crate::domain::{
    DomainError, DomainResult, NewRestaurantPizza, Pizza, RepositoryProvider, Restaurant,
    RestaurantPizzaDetails,
};

pub struct RestaurantPizzaService {
    repos: Arc<dyn RepositoryProvider>,
}

impl RestaurantPizzaService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Validate the request, confirm both ends exist, then persist.
    pub async fn create_restaurant_pizza(
        &self,
        cmd: CreateRestaurantPizza,
    ) -> DomainResult<RestaurantPizzaDetails> {
        let checked = cmd.check().inspect_err(|e| debug!("Rejected restaurant pizza: {}", e))?;

        let pizza = self.find_pizza(&checked.pizza_id).await?;
        let restaurant = self.find_restaurant(&checked.restaurant_id).await?;

        let created = self
            .repos
            .restaurant_pizzas()
            .create(NewRestaurantPizza {
                price: checked.price,
                pizza_id: pizza.id,
                restaurant_id: restaurant.id,
            })
            .await?;

        info!(
            "{} now offers {} at {}",
            created.restaurant.name, created.pizza.name, created.restaurant_pizza.price
        );
        Ok(created)
    }

    /// Ids that cannot be a key are reported like missing rows.
    async fn find_pizza(&self, id: &IntegerInput) -> DomainResult<Pizza> {
        let found = match id.to_key() {
            Some(key) => self.repos.pizzas().find_by_id(key).await?,
            None => None,
        };
        found.ok_or_else(|| DomainError::not_found("Pizza", id))
    }

    async fn find_restaurant(&self, id: &IntegerInput) -> DomainResult<Restaurant> {
        let found = match id.to_key() {
            Some(key) => self.repos.restaurants().find_by_id(key).await?,
            None => None,
        };
        found.ok_or_else(|| DomainError::not_found("Restaurant", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::{PRICE_NOT_INTEGER, REQUIRED_FIELDS};
    use crate::domain::{NewPizza, NewRestaurant};
    use crate::test_support::{memory_db, repos};

    struct Fixture {
        service: RestaurantPizzaService,
        repos: Arc<dyn RepositoryProvider>,
        restaurant: Restaurant,
        pizza: Pizza,
    }

    async fn fixture() -> Fixture {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(repos(memory_db().await));
        let restaurant = repos
            .restaurants()
            .save(NewRestaurant::new("Dominion", "Main St"))
            .await
            .unwrap();
        let pizza = repos
            .pizzas()
            .save(NewPizza::new("Margherita", "Tomato, Cheese"))
            .await
            .unwrap();
        Fixture {
            service: RestaurantPizzaService::new(repos.clone()),
            repos,
            restaurant,
            pizza,
        }
    }

    #[tokio::test]
    async fn accepts_valid_price() {
        let f = fixture().await;

        let created = f
            .service
            .create_restaurant_pizza(CreateRestaurantPizza::new(
                12,
                f.pizza.id,
                f.restaurant.id,
            ))
            .await
            .unwrap();

        assert_eq!(created.restaurant_pizza.price, 12);
        assert_eq!(created.pizza, f.pizza);
        assert_eq!(created.restaurant, f.restaurant);
        assert_eq!(f.repos.restaurant_pizzas().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_bad_prices_without_persisting() {
        let f = fixture().await;
        let pizza_id = f.pizza.id;
        let restaurant_id = f.restaurant.id;

        let cases = [
            (CreateRestaurantPizza::new(0, pizza_id, restaurant_id), "price must be a positive integer"),
            (CreateRestaurantPizza::new(-5, pizza_id, restaurant_id), "price must be a positive integer"),
            (CreateRestaurantPizza::new("abc", pizza_id, restaurant_id), PRICE_NOT_INTEGER),
            (
                CreateRestaurantPizza {
                    price: None,
                    pizza_id: Some("1".into()),
                    restaurant_id: Some(restaurant_id.into()),
                },
                REQUIRED_FIELDS,
            ),
        ];

        for (cmd, expected) in cases {
            let err = f.service.create_restaurant_pizza(cmd).await.unwrap_err();
            assert_eq!(err, DomainError::validation(expected));
        }
        assert_eq!(f.repos.restaurant_pizzas().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_pizza_is_reported_before_restaurant() {
        let f = fixture().await;

        let err = f
            .service
            .create_restaurant_pizza(CreateRestaurantPizza::new(10, 9999, 9999))
            .await
            .unwrap_err();
        assert_eq!(err.messages(), vec!["Pizza not found".to_string()]);

        let err = f
            .service
            .create_restaurant_pizza(CreateRestaurantPizza::new(10, f.pizza.id, 9999))
            .await
            .unwrap_err();
        assert_eq!(err.messages(), vec!["Restaurant not found".to_string()]);

        assert_eq!(f.repos.restaurant_pizzas().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_outside_the_key_range_are_not_found() {
        let f = fixture().await;

        let err = f
            .service
            .create_restaurant_pizza(CreateRestaurantPizza::new(
                10,
                i64::from(i32::MAX) + 1,
                f.restaurant.id,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Pizza", .. }));
    }

    #[tokio::test]
    async fn numeric_string_ids_resolve() {
        let f = fixture().await;
        let pizza_id = f.pizza.id.to_string();
        let restaurant_id = format!(" {} ", f.restaurant.id);

        let created = f
            .service
            .create_restaurant_pizza(CreateRestaurantPizza::new(
                "7",
                pizza_id.as_str(),
                restaurant_id.as_str(),
            ))
            .await
            .unwrap();
        assert_eq!(created.pizza, f.pizza);
        assert_eq!(created.restaurant, f.restaurant);
    }

    #[tokio::test]
    async fn non_numeric_ids_are_not_found() {
        let f = fixture().await;

        let err = f
            .service
            .create_restaurant_pizza(CreateRestaurantPizza::new(10, "abc", f.restaurant.id))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Pizza", "abc"));

        let err = f
            .service
            .create_restaurant_pizza(CreateRestaurantPizza::new(10, f.pizza.id, "x1"))
            .await
            .unwrap_err();
        assert_eq!(err.messages(), vec!["Restaurant not found".to_string()]);
        assert_eq!(f.repos.restaurant_pizzas().count().await.unwrap(), 0);
    }
}
