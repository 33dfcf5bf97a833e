//! Infrastructure layer - external concerns

pub mod database;
pub mod server;

pub use database::{init_database, seed_sample_data, DatabaseConfig, SeaOrmRepositoryProvider};
pub use server::{ShutdownCoordinator, ShutdownSignal};
