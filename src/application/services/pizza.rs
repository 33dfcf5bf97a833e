//! Pizza queries

use std::sync::Arc;

use crate::domain::{DomainResult, Pizza, RepositoryProvider};

pub struct PizzaService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PizzaService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_pizzas(&self) -> DomainResult<Vec<Pizza>> {
        self.repos.pizzas().find_all().await
    }
}
