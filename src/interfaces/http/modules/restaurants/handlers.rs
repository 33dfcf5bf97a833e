//! Restaurant handlers

use std::num::IntErrorKind;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{RestaurantDetailResponse, RestaurantResponse};
use crate::application::RestaurantService;
use crate::domain::DomainError;
use crate::interfaces::http::error::{ApiError, ErrorResponse};

/// Numbers too large for any key answer 404 like an unknown id; anything
/// that is not a number at all is a 400.
fn parse_restaurant_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ApiError::single(DomainError::not_found("Restaurant", raw))
        }
        _ => ApiError::single(DomainError::validation(format!(
            "Invalid restaurant id: {}",
            raw
        ))),
    })
}

/// Restaurant handler state
#[derive(Clone)]
pub struct RestaurantHandlerState {
    pub service: Arc<RestaurantService>,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "Restaurants",
    responses(
        (status = 200, description = "All restaurants", body = Vec<RestaurantResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_restaurants(
    State(state): State<RestaurantHandlerState>,
) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    let restaurants = state
        .service
        .list_restaurants()
        .await
        .map_err(ApiError::single)?;
    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = "Restaurants",
    params(("id" = i64, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetailResponse),
        (status = 400, description = "Id is not a number", body = ErrorResponse),
        (status = 404, description = "Restaurant not found", body = ErrorResponse)
    )
)]
pub async fn get_restaurant(
    State(state): State<RestaurantHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<RestaurantDetailResponse>, ApiError> {
    let id = parse_restaurant_id(&id)?;
    let restaurant = state
        .service
        .get_restaurant(id)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(restaurant.into()))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = "Restaurants",
    params(("id" = i64, Path, description = "Restaurant ID")),
    responses(
        (status = 204, description = "Restaurant and its restaurant pizzas deleted"),
        (status = 400, description = "Id is not a number", body = ErrorResponse),
        (status = 404, description = "Restaurant not found", body = ErrorResponse)
    )
)]
pub async fn delete_restaurant(
    State(state): State<RestaurantHandlerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_restaurant_id(&id)?;
    state
        .service
        .delete_restaurant(id)
        .await
        .map_err(ApiError::single)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_of(raw: &str) -> (StatusCode, String) {
        match parse_restaurant_id(raw).unwrap_err() {
            ApiError::Single(status, body) => (status, body.error),
            ApiError::List(status, body) => (status, body.errors.join(", ")),
        }
    }

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_restaurant_id("42").unwrap(), 42);
        assert_eq!(parse_restaurant_id("-1").unwrap(), -1);
        assert_eq!(parse_restaurant_id("3000000000").unwrap(), 3_000_000_000);
    }

    #[test]
    fn overflowing_ids_are_not_found() {
        for raw in ["99999999999999999999", "-99999999999999999999"] {
            assert_eq!(
                error_of(raw),
                (StatusCode::NOT_FOUND, "Restaurant not found".to_string())
            );
        }
    }

    #[test]
    fn non_numeric_ids_are_bad_requests() {
        assert_eq!(
            error_of("abc"),
            (StatusCode::BAD_REQUEST, "Invalid restaurant id: abc".to_string())
        );
        assert_eq!(error_of("1.5").0, StatusCode::BAD_REQUEST);
    }
}
