//! Create restaurant pizza command
//!
//! Checks run in a fixed order and stop at the first failure: presence of
//! all three fields, integer coercion of `price`, then the price range. The
//! ids are resolved by the service against the store; an id that cannot name
//! a row is reported as not found.

use std::fmt;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::domain::{DomainError, DomainResult, MIN_PRICE};

pub const REQUIRED_FIELDS: &str = "price, pizza_id, and restaurant_id are required";
pub const PRICE_NOT_INTEGER: &str = "price must be an integer";
pub const PRICE_NOT_POSITIVE: &str = "price must be a positive integer";

/// Raw integer field as sent by the client.
///
/// JSON integers, integral floats and numeric strings coerce to an integer;
/// everything else is kept so it can be reported.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntegerInput {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl IntegerInput {
    /// Integral floats beyond `i64` saturate.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
            Self::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// The value as a primary key, if it can be one.
    pub fn to_key(&self) -> Option<i32> {
        self.to_integer().and_then(|v| i32::try_from(v).ok())
    }
}

impl fmt::Display for IntegerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for IntegerInput {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i64> for IntegerInput {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for IntegerInput {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Request to link a pizza to a restaurant at a price.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CreateRestaurantPizza {
    #[schema(value_type = Option<i32>, example = 10)]
    pub price: Option<IntegerInput>,
    #[schema(value_type = Option<i32>, example = 1)]
    pub pizza_id: Option<IntegerInput>,
    #[schema(value_type = Option<i32>, example = 1)]
    pub restaurant_id: Option<IntegerInput>,
}

/// Output of the input checks; the ids are not yet resolved.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CheckedRestaurantPizza {
    #[validate(range(min = 1, max = 30, message = "price must be between 1 and 30"))]
    pub price: i32,
    pub pizza_id: IntegerInput,
    pub restaurant_id: IntegerInput,
}

impl CreateRestaurantPizza {
    pub fn new(
        price: impl Into<IntegerInput>,
        pizza_id: impl Into<IntegerInput>,
        restaurant_id: impl Into<IntegerInput>,
    ) -> Self {
        Self {
            price: Some(price.into()),
            pizza_id: Some(pizza_id.into()),
            restaurant_id: Some(restaurant_id.into()),
        }
    }

    pub fn check(&self) -> DomainResult<CheckedRestaurantPizza> {
        let (Some(price), Some(pizza_id), Some(restaurant_id)) =
            (&self.price, &self.pizza_id, &self.restaurant_id)
        else {
            return Err(DomainError::validation(REQUIRED_FIELDS));
        };

        let price = price
            .to_integer()
            .ok_or_else(|| DomainError::validation(PRICE_NOT_INTEGER))?;
        if price < i64::from(MIN_PRICE) {
            return Err(DomainError::validation(PRICE_NOT_POSITIVE));
        }

        // Saturate so huge values fail the upper bound, not the conversion.
        let checked = CheckedRestaurantPizza {
            price: i32::try_from(price).unwrap_or(i32::MAX),
            pizza_id: pizza_id.clone(),
            restaurant_id: restaurant_id.clone(),
        };
        checked.validate().map_err(validation_error)?;
        Ok(checked)
    }
}

fn validation_error(errors: ValidationErrors) -> DomainError {
    let messages = errors
        .field_errors()
        .into_values()
        .flat_map(|errs| {
            errs.iter().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
        })
        .collect();
    DomainError::Validation(messages)
}
