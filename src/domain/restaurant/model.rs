//! Restaurant domain entity

use crate::domain::restaurant_pizza::PizzaOffering;

/// Restaurant as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Restaurant to be inserted (id assigned by the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Restaurant together with every pizza it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantWithPizzas {
    pub restaurant: Restaurant,
    pub offerings: Vec<PizzaOffering>,
}
