//! SeaORM implementation of RestaurantRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, warn};

use super::db_err;
use super::pizza_repository::entity_to_domain as pizza_to_domain;
use super::restaurant_pizza_repository::entity_to_domain as restaurant_pizza_to_domain;
use crate::domain::restaurant::{
    NewRestaurant, Restaurant, RestaurantRepository, RestaurantWithPizzas,
};
use crate::domain::restaurant_pizza::PizzaOffering;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{pizza, restaurant, restaurant_pizza};

pub(crate) fn entity_to_domain(m: restaurant::Model) -> Restaurant {
    Restaurant {
        id: m.id,
        name: m.name,
        address: m.address,
    }
}

pub struct SeaOrmRestaurantRepository {
    db: DatabaseConnection,
}

impl SeaOrmRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn find_all(&self) -> DomainResult<Vec<Restaurant>> {
        let models = restaurant::Entity::find()
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Restaurant>> {
        let model = restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_with_pizzas(&self, id: i32) -> DomainResult<Option<RestaurantWithPizzas>> {
        // Both reads share one transaction so the offerings match the restaurant row.
        let txn = self.db.begin().await.map_err(db_err)?;

        let Some(model) = restaurant::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
        else {
            txn.commit().await.map_err(db_err)?;
            return Ok(None);
        };

        let rows = restaurant_pizza::Entity::find()
            .filter(restaurant_pizza::Column::RestaurantId.eq(id))
            .find_also_related(pizza::Entity)
            .order_by_asc(restaurant_pizza::Column::Id)
            .all(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        let offerings = rows
            .into_iter()
            .filter_map(|(link, pizza)| match pizza {
                Some(pizza) => Some(PizzaOffering {
                    restaurant_pizza: restaurant_pizza_to_domain(link),
                    pizza: pizza_to_domain(pizza),
                }),
                None => {
                    warn!(
                        "Restaurant pizza {} references missing pizza {}",
                        link.id, link.pizza_id
                    );
                    None
                }
            })
            .collect();

        Ok(Some(RestaurantWithPizzas {
            restaurant: entity_to_domain(model),
            offerings,
        }))
    }

    async fn save(&self, r: NewRestaurant) -> DomainResult<Restaurant> {
        let model = restaurant::ActiveModel {
            id: NotSet,
            name: Set(r.name),
            address: Set(r.address),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Restaurant saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = restaurant::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("Restaurant", id));
        }

        // Dependent rows go first so the cascade never relies on the
        // backend's foreign key support alone.
        let links = restaurant_pizza::Entity::delete_many()
            .filter(restaurant_pizza::Column::RestaurantId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = restaurant::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("Restaurant", id));
        }

        txn.commit().await.map_err(db_err)?;
        info!(
            "Restaurant {} deleted together with {} restaurant pizza(s)",
            id, links.rows_affected
        );
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        restaurant::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPizza, NewRestaurantPizza, RepositoryProvider};
    use crate::test_support::{memory_db, repos};

    #[tokio::test]
    async fn find_all_returns_rows_in_id_order() {
        let repos = repos(memory_db().await);
        let a = repos
            .restaurants()
            .save(NewRestaurant::new("Dominion", "Main St"))
            .await
            .unwrap();
        let b = repos
            .restaurants()
            .save(NewRestaurant::new("Kiki's Pizza", "Broadway"))
            .await
            .unwrap();

        let all = repos.restaurants().find_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let repos = repos(memory_db().await);

        assert_eq!(repos.restaurants().find_by_id(42).await.unwrap(), None);
        assert_eq!(repos.restaurants().find_with_pizzas(42).await.unwrap(), None);
        assert_eq!(
            repos.restaurants().delete(42).await.unwrap_err(),
            DomainError::not_found("Restaurant", 42)
        );
    }

    #[tokio::test]
    async fn find_with_pizzas_nests_each_pizza() {
        let repos = repos(memory_db().await);
        let r = repos
            .restaurants()
            .save(NewRestaurant::new("Dominion", "Main St"))
            .await
            .unwrap();
        let p = repos
            .pizzas()
            .save(NewPizza::new("Margherita", "Tomato, Cheese"))
            .await
            .unwrap();
        repos
            .restaurant_pizzas()
            .create(NewRestaurantPizza {
                price: 10,
                pizza_id: p.id,
                restaurant_id: r.id,
            })
            .await
            .unwrap();

        let detail = repos
            .restaurants()
            .find_with_pizzas(r.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.restaurant, r);
        assert_eq!(detail.offerings.len(), 1);
        assert_eq!(detail.offerings[0].pizza, p);
        assert_eq!(detail.offerings[0].restaurant_pizza.price, 10);
    }

    #[tokio::test]
    async fn delete_cascades_only_to_own_restaurant_pizzas() {
        let repos = repos(memory_db().await);
        let doomed = repos
            .restaurants()
            .save(NewRestaurant::new("Dominion", "Main St"))
            .await
            .unwrap();
        let kept = repos
            .restaurants()
            .save(NewRestaurant::new("Sanjay's Pizza", "Elm St"))
            .await
            .unwrap();
        let margherita = repos
            .pizzas()
            .save(NewPizza::new("Margherita", "Tomato, Cheese"))
            .await
            .unwrap();
        let pepperoni = repos
            .pizzas()
            .save(NewPizza::new("Pepperoni", "Tomato, Cheese, Pepperoni"))
            .await
            .unwrap();

        for (restaurant_id, pizza_id, price) in [
            (doomed.id, margherita.id, 10),
            (doomed.id, pepperoni.id, 12),
            (kept.id, margherita.id, 9),
        ] {
            repos
                .restaurant_pizzas()
                .create(NewRestaurantPizza {
                    price,
                    pizza_id,
                    restaurant_id,
                })
                .await
                .unwrap();
        }

        repos.restaurants().delete(doomed.id).await.unwrap();

        assert_eq!(repos.restaurants().find_by_id(doomed.id).await.unwrap(), None);
        assert!(repos
            .restaurant_pizzas()
            .find_by_restaurant(doomed.id)
            .await
            .unwrap()
            .is_empty());

        let survivors = repos
            .restaurant_pizzas()
            .find_by_restaurant(kept.id)
            .await
            .unwrap();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].price, 9);
        assert_eq!(repos.restaurant_pizzas().count().await.unwrap(), 1);
        assert_eq!(repos.pizzas().count().await.unwrap(), 2);
    }
}
