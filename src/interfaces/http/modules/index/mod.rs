//! Landing page

pub mod handlers;

pub use handlers::*;
