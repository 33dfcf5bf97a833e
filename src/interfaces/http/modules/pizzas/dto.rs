//! Pizza DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Pizza;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PizzaResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Margherita")]
    pub name: String,
    #[schema(example = "Tomato, Cheese")]
    pub ingredients: String,
}

impl From<Pizza> for PizzaResponse {
    fn from(p: Pizza) -> Self {
        Self {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}
