//! Domain error → HTTP response mapping
//!
//! Single-resource routes answer `{"error": "..."}`; the create route answers
//! `{"errors": [...]}`. Storage faults always become a bare 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Single error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// List of error messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub enum ApiError {
    Single(StatusCode, ErrorResponse),
    List(StatusCode, ErrorsResponse),
}

impl ApiError {
    /// `{"error": ...}` shape.
    pub fn single(e: DomainError) -> Self {
        let status = status_for(&e);
        log_fault(&e);
        Self::Single(
            status,
            ErrorResponse {
                error: e.client_message(),
            },
        )
    }

    /// `{"errors": [...]}` shape, unless the store itself failed.
    pub fn list(e: DomainError) -> Self {
        if matches!(e, DomainError::Storage(_)) {
            return Self::single(e);
        }
        Self::List(
            status_for(&e),
            ErrorsResponse {
                errors: e.messages(),
            },
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Single(status, _) | Self::List(status, _) => *status,
        }
    }
}

fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::ConstraintViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_fault(e: &DomainError) {
    if let DomainError::Storage(msg) = e {
        error!("Storage failure: {}", msg);
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Single(status, body) => (status, Json(body)).into_response(),
            Self::List(status, body) => (status, Json(body)).into_response(),
        }
    }
}
