//! HTTP REST API interfaces
//!
//! - `common`: JSON body extractor
//! - `error`: domain error to response mapping
//! - `modules`: handlers and response projections per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod error;
pub mod modules;
pub mod router;

pub use error::{ApiError, ErrorResponse, ErrorsResponse};
pub use router::{create_api_router, ApiDoc};
