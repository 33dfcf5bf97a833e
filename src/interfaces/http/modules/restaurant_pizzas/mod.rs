//! Restaurant pizza module: priced links between restaurants and pizzas

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
