//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    CreateRestaurantPizza, PizzaService, RestaurantPizzaService, RestaurantService,
};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::error::{ErrorResponse, ErrorsResponse};
use crate::interfaces::http::modules::health::{self, ComponentHealth, HealthResponse, HealthState};
use crate::interfaces::http::modules::pizzas::{self, PizzaHandlerState, PizzaResponse};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::restaurant_pizzas::{
    self, RestaurantPizzaHandlerState, RestaurantPizzaResponse,
};
use crate::interfaces::http::modules::restaurants::{
    self, RestaurantDetailResponse, RestaurantHandlerState, RestaurantPizzaEntry,
    RestaurantResponse,
};
use crate::interfaces::http::modules::index;

/// Unified state for every route.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub restaurants: Arc<RestaurantService>,
    pub pizzas: Arc<PizzaService>,
    pub restaurant_pizzas: Arc<RestaurantPizzaService>,
    pub health: HealthState,
}

impl AppState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, db: DatabaseConnection) -> Self {
        Self {
            restaurants: Arc::new(RestaurantService::new(Arc::clone(&repos))),
            pizzas: Arc::new(PizzaService::new(Arc::clone(&repos))),
            restaurant_pizzas: Arc::new(RestaurantPizzaService::new(repos)),
            health: HealthState::new(db),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for RestaurantHandlerState {
    fn from_ref(s: &AppState) -> Self {
        RestaurantHandlerState {
            service: Arc::clone(&s.restaurants),
        }
    }
}

impl FromRef<AppState> for PizzaHandlerState {
    fn from_ref(s: &AppState) -> Self {
        PizzaHandlerState {
            service: Arc::clone(&s.pizzas),
        }
    }
}

impl FromRef<AppState> for RestaurantPizzaHandlerState {
    fn from_ref(s: &AppState) -> Self {
        RestaurantPizzaHandlerState {
            service: Arc::clone(&s.restaurant_pizzas),
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        s.health.clone()
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        index::index,
        health::health_check,
        // Restaurants
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        // Pizzas
        pizzas::list_pizzas,
        // Restaurant pizzas
        restaurant_pizzas::create_restaurant_pizza,
    ),
    components(schemas(
        ErrorResponse,
        ErrorsResponse,
        HealthResponse,
        ComponentHealth,
        RestaurantResponse,
        RestaurantDetailResponse,
        RestaurantPizzaEntry,
        PizzaResponse,
        CreateRestaurantPizza,
        RestaurantPizzaResponse,
    )),
    tags(
        (name = "Index", description = "Landing page"),
        (name = "Health", description = "Service health"),
        (name = "Restaurants", description = "Restaurants and their menus"),
        (name = "Pizzas", description = "Pizza catalogue"),
        (name = "RestaurantPizzas", description = "Priced restaurant/pizza links"),
    ),
    info(
        title = "Pizzeria Service API",
        version = "0.1.0",
        description = "Restaurants, pizzas and the prices restaurants charge for them"
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn create_api_router(repos: Arc<dyn RepositoryProvider>, db: DatabaseConnection) -> Router {
    let state = AppState::new(repos, db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health_check))
        .route("/restaurants", get(restaurants::list_restaurants))
        .route(
            "/restaurants/{id}",
            get(restaurants::get_restaurant).delete(restaurants::delete_restaurant),
        )
        .route("/pizzas", get(pizzas::list_pizzas))
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizzas::create_restaurant_pizza),
        )
        .with_state(state)
        .merge(swagger_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
