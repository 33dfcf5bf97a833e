use axum::response::Html;

#[utoipa::path(
    get,
    path = "/",
    tag = "Index",
    responses((status = 200, description = "Landing page", content_type = "text/html", body = String))
)]
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
