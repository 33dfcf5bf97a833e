//! Restaurant pizza domain entity

use crate::domain::pizza::Pizza;
use crate::domain::restaurant::Restaurant;

/// Lowest accepted price.
pub const MIN_PRICE: i32 = 1;
/// Highest accepted price (inclusive).
pub const MAX_PRICE: i32 = 30;

/// Priced link between a restaurant and a pizza.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// Restaurant pizza to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// One offering on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaOffering {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}

/// A freshly created restaurant pizza with both of its ends loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaDetails {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}
