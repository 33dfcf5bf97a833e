//! Restaurant pizza handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::RestaurantPizzaResponse;
use crate::application::{CreateRestaurantPizza, RestaurantPizzaService};
use crate::interfaces::http::common::JsonBody;
use crate::interfaces::http::error::{ApiError, ErrorsResponse};

#[derive(Clone)]
pub struct RestaurantPizzaHandlerState {
    pub service: Arc<RestaurantPizzaService>,
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = "RestaurantPizzas",
    request_body = CreateRestaurantPizza,
    responses(
        (status = 201, description = "Restaurant pizza created", body = RestaurantPizzaResponse),
        (status = 400, description = "Missing, malformed or out-of-range fields", body = ErrorsResponse),
        (status = 404, description = "Pizza or restaurant not found", body = ErrorsResponse),
        (status = 422, description = "Rejected by the store", body = ErrorsResponse)
    )
)]
pub async fn create_restaurant_pizza(
    State(state): State<RestaurantPizzaHandlerState>,
    JsonBody(request): JsonBody<CreateRestaurantPizza>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ApiError> {
    let created = state
        .service
        .create_restaurant_pizza(request)
        .await
        .map_err(ApiError::list)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
