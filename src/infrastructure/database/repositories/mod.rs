//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod pizza_repository;
pub mod repository_provider;
pub mod restaurant_pizza_repository;
pub mod restaurant_repository;

pub use pizza_repository::SeaOrmPizzaRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use restaurant_pizza_repository::SeaOrmRestaurantPizzaRepository;
pub use restaurant_repository::SeaOrmRestaurantRepository;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

/// Classify a SeaORM error.
///
/// Constraint failures raised by the store (foreign keys, unique indexes,
/// CHECK clauses, entity hooks) become `ConstraintViolation`; anything else is
/// an unexpected storage fault.
pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return DomainError::ConstraintViolation(format!("Foreign key violation: {}", msg));
        }
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            return DomainError::ConstraintViolation(format!("Unique violation: {}", msg));
        }
        _ => {}
    }

    if let DbErr::Custom(msg) = &e {
        return DomainError::ConstraintViolation(msg.clone());
    }

    let text = e.to_string();
    if text.contains("CHECK constraint failed") {
        DomainError::ConstraintViolation(text)
    } else {
        DomainError::Storage(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_errors_are_constraint_violations() {
        let err = db_err(DbErr::Custom("price must be a positive integer".into()));
        assert_eq!(
            err,
            DomainError::ConstraintViolation("price must be a positive integer".into())
        );
    }

    #[test]
    fn other_errors_are_storage_faults() {
        let err = db_err(DbErr::Conn(sea_orm::RuntimeErr::Internal("refused".into())));
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
