//! Commands: validated write requests

pub mod create_restaurant_pizza;

pub use create_restaurant_pizza::{
    CheckedRestaurantPizza, CreateRestaurantPizza, IntegerInput, PRICE_NOT_INTEGER,
    PRICE_NOT_POSITIVE, REQUIRED_FIELDS,
};
