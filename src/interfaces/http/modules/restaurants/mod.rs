//! Restaurant module: listing, detail with menu, deletion

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
