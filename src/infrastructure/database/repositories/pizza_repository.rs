//! SeaORM implementation of PizzaRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};
use tracing::info;

use super::db_err;
use crate::domain::pizza::{NewPizza, Pizza, PizzaRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::pizza;

pub(crate) fn entity_to_domain(m: pizza::Model) -> Pizza {
    Pizza {
        id: m.id,
        name: m.name,
        ingredients: m.ingredients,
    }
}

pub struct SeaOrmPizzaRepository {
    db: DatabaseConnection,
}

impl SeaOrmPizzaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PizzaRepository for SeaOrmPizzaRepository {
    async fn find_all(&self) -> DomainResult<Vec<Pizza>> {
        let models = pizza::Entity::find()
            .order_by_asc(pizza::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pizza>> {
        let model = pizza::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn save(&self, p: NewPizza) -> DomainResult<Pizza> {
        let model = pizza::ActiveModel {
            id: NotSet,
            name: Set(p.name),
            ingredients: Set(p.ingredients),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Pizza saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn count(&self) -> DomainResult<u64> {
        pizza::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, RepositoryProvider};
    use crate::test_support::{memory_db, repos};

    #[tokio::test]
    async fn listing_twice_yields_identical_output() {
        let repos = repos(memory_db().await);
        for (name, ingredients) in [
            ("Emma", "Dough, Tomato Sauce, Cheese"),
            ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
            ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
        ] {
            repos
                .pizzas()
                .save(NewPizza::new(name, ingredients))
                .await
                .unwrap();
        }

        let first = repos.pizzas().find_all().await.unwrap();
        let second = repos.pizzas().find_all().await.unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn find_by_id_round_trips_fields() {
        let repos = repos(memory_db().await);
        let saved = repos
            .pizzas()
            .save(NewPizza::new("Margherita", "Tomato, Cheese"))
            .await
            .unwrap();

        let found = repos.pizzas().find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repos.pizzas().find_by_id(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_name_is_rejected_by_the_store() {
        let repos = repos(memory_db().await);
        let err = repos
            .pizzas()
            .save(NewPizza::new("", "Tomato"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
    }
}
