//! Static landing page.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Describe the service and link to the API documentation.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Static HTML page", body = String, content_type = "text/html")),
    tags = ["pages"],
    operation_id = "homePage"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
