//! Restaurant pizza DTOs
//!
//! The request body is [`crate::application::CreateRestaurantPizza`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RestaurantPizzaDetails;
use crate::interfaces::http::modules::pizzas::PizzaResponse;
use crate::interfaces::http::modules::restaurants::RestaurantResponse;

/// Created restaurant pizza with both ends expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaResponse {
    pub id: i32,
    #[schema(example = 10)]
    pub price: i32,
    pub pizza: PizzaResponse,
    pub pizza_id: i32,
    pub restaurant: RestaurantResponse,
    pub restaurant_id: i32,
}

impl From<RestaurantPizzaDetails> for RestaurantPizzaResponse {
    fn from(d: RestaurantPizzaDetails) -> Self {
        Self {
            id: d.restaurant_pizza.id,
            price: d.restaurant_pizza.price,
            pizza_id: d.restaurant_pizza.pizza_id,
            restaurant_id: d.restaurant_pizza.restaurant_id,
            pizza: d.pizza.into(),
            restaurant: d.restaurant.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Pizza, Restaurant, RestaurantPizza};
    use serde_json::json;

    #[test]
    fn both_ends_are_expanded() {
        let details = RestaurantPizzaDetails {
            restaurant_pizza: RestaurantPizza {
                id: 4,
                price: 12,
                pizza_id: 2,
                restaurant_id: 3,
            },
            pizza: Pizza {
                id: 2,
                name: "Geri".into(),
                ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".into(),
            },
            restaurant: Restaurant {
                id: 3,
                name: "Kiki's Pizza".into(),
                address: "address3".into(),
            },
        };

        let value = serde_json::to_value(RestaurantPizzaResponse::from(details)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 4,
                "price": 12,
                "pizza_id": 2,
                "restaurant_id": 3,
                "pizza": {
                    "id": 2,
                    "name": "Geri",
                    "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"
                },
                "restaurant": {"id": 3, "name": "Kiki's Pizza", "address": "address3"}
            })
        );
    }
}
