//! Pizza handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::PizzaResponse;
use crate::application::PizzaService;
use crate::interfaces::http::error::{ApiError, ErrorResponse};

#[derive(Clone)]
pub struct PizzaHandlerState {
    pub service: Arc<PizzaService>,
}

#[utoipa::path(
    get,
    path = "/pizzas",
    tag = "Pizzas",
    responses(
        (status = 200, description = "All pizzas", body = Vec<PizzaResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_pizzas(
    State(state): State<PizzaHandlerState>,
) -> Result<Json<Vec<PizzaResponse>>, ApiError> {
    let pizzas = state.service.list_pizzas().await.map_err(ApiError::single)?;
    Ok(Json(pizzas.into_iter().map(Into::into).collect()))
}
