//! Pizza aggregate

pub mod model;
pub mod repository;

pub use model::{NewPizza, Pizza};
pub use repository::PizzaRepository;
