//! JSON body extractor for Axum
//!
//! `JsonBody<T>` works like `axum::Json<T>`, but a body that cannot be read
//! or deserialized is answered with `400` and the `{"errors": [...]}` shape
//! used by every write route.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::interfaces::http::error::ErrorsResponse;

/// An extractor that deserializes a JSON request body.
///
/// ```ignore
/// async fn handler(JsonBody(body): JsonBody<CreateRestaurantPizza>) {
///     // field rules are checked by the command, not here
/// }
/// ```
pub struct JsonBody<T>(pub T);

/// Extraction failure for `JsonBody`.
#[derive(Debug)]
pub struct JsonBodyRejection(pub JsonRejection);

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let message = format!("Invalid JSON: {}", self.0.body_text());
        debug!("{}", message);
        let body = ErrorsResponse {
            errors: vec![message],
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct TestBody {
        #[allow(dead_code)]
        name: String,
    }

    async fn handler(JsonBody(_body): JsonBody<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(content_type: &str, body: &'static str) -> axum::http::Response<Body> {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        app().oneshot(req).await.unwrap()
    }

    async fn errors_of(resp: axum::http::Response<Body>) -> Vec<String> {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice::<ErrorsResponse>(&bytes)
            .unwrap()
            .errors
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let resp = send("application/json", r#"{"name": "Alice"}"#).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_400_with_errors_list() {
        let resp = send("application/json", "not json").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let errors = errors_of(resp).await;
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn wrong_content_type_returns_400() {
        let resp = send("text/plain", r#"{"name": "Alice"}"#).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
