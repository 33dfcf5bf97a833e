pub mod health;
pub mod index;
pub mod pizzas;
pub mod request_id;
pub mod restaurant_pizzas;
pub mod restaurants;
