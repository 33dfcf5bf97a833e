//! SeaORM implementation of RestaurantPizzaRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::db_err;
use super::pizza_repository::entity_to_domain as pizza_to_domain;
use super::restaurant_repository::entity_to_domain as restaurant_to_domain;
use crate::domain::restaurant_pizza::{
    NewRestaurantPizza, RestaurantPizza, RestaurantPizzaDetails, RestaurantPizzaRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{pizza, restaurant, restaurant_pizza};

pub(crate) fn entity_to_domain(m: restaurant_pizza::Model) -> RestaurantPizza {
    RestaurantPizza {
        id: m.id,
        price: m.price,
        pizza_id: m.pizza_id,
        restaurant_id: m.restaurant_id,
    }
}

pub struct SeaOrmRestaurantPizzaRepository {
    db: DatabaseConnection,
}

impl SeaOrmRestaurantPizzaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantPizzaRepository for SeaOrmRestaurantPizzaRepository {
    async fn create(&self, new: NewRestaurantPizza) -> DomainResult<RestaurantPizzaDetails> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let Some(pizza) = pizza::Entity::find_by_id(new.pizza_id)
            .one(&txn)
            .await
            .map_err(db_err)?
        else {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("Pizza", new.pizza_id));
        };

        let Some(restaurant) = restaurant::Entity::find_by_id(new.restaurant_id)
            .one(&txn)
            .await
            .map_err(db_err)?
        else {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("Restaurant", new.restaurant_id));
        };

        // `before_save` and the CHECK clause both refuse non-positive prices.
        let model = restaurant_pizza::ActiveModel {
            id: NotSet,
            price: Set(new.price),
            pizza_id: Set(pizza.id),
            restaurant_id: Set(restaurant.id),
        };
        let saved = match model.insert(&txn).await {
            Ok(saved) => saved,
            Err(e) => {
                txn.rollback().await.map_err(db_err)?;
                return Err(db_err(e));
            }
        };

        txn.commit().await.map_err(db_err)?;
        info!(
            "Restaurant pizza {} saved: restaurant={} pizza={} price={}",
            saved.id, saved.restaurant_id, saved.pizza_id, saved.price
        );

        Ok(RestaurantPizzaDetails {
            restaurant_pizza: entity_to_domain(saved),
            pizza: pizza_to_domain(pizza),
            restaurant: restaurant_to_domain(restaurant),
        })
    }

    async fn find_by_restaurant(&self, restaurant_id: i32) -> DomainResult<Vec<RestaurantPizza>> {
        let models = restaurant_pizza::Entity::find()
            .filter(restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(restaurant_pizza::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        restaurant_pizza::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
