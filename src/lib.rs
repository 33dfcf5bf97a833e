//! # Pizzeria Service
//!
//! HTTP data service for restaurants, pizzas and the prices restaurants
//! charge for them.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, repository traits and errors
//! - **application**: Request checks and the services that run them
//! - **infrastructure**: SeaORM store, migrations, seeding, shutdown
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Bootstrap shared by the binary and tests

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
