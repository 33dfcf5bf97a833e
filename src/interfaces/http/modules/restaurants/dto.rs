//! Restaurant DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{PizzaOffering, Restaurant, RestaurantWithPizzas};
use crate::interfaces::http::modules::pizzas::PizzaResponse;

/// Restaurant as shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Dominion")]
    pub name: String,
    #[schema(example = "Main St")]
    pub address: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

/// One entry of a restaurant's menu, with its pizza nested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaEntry {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaResponse,
}

impl From<PizzaOffering> for RestaurantPizzaEntry {
    fn from(o: PizzaOffering) -> Self {
        Self {
            id: o.restaurant_pizza.id,
            price: o.restaurant_pizza.price,
            pizza_id: o.restaurant_pizza.pizza_id,
            restaurant_id: o.restaurant_pizza.restaurant_id,
            pizza: o.pizza.into(),
        }
    }
}

/// Restaurant detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDetailResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub associations: Vec<RestaurantPizzaEntry>,
}

impl From<RestaurantWithPizzas> for RestaurantDetailResponse {
    fn from(r: RestaurantWithPizzas) -> Self {
        Self {
            id: r.restaurant.id,
            name: r.restaurant.name,
            address: r.restaurant.address,
            associations: r.offerings.into_iter().map(Into::into).collect(),
        }
    }
}
