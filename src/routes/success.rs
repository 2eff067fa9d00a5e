use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

#[derive(serde::Deserialize)]
pub struct SuccessQuery {
    name: Option<String>,
}

/// Echoes the redirect's `name` parameter back, interpolated as-is.
pub async fn success(query: web::Query<SuccessQuery>) -> HttpResponse {
    let name = query.0.name.unwrap_or_default();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<h2>✅ Thank you, <b>{name}</b>! You're subscribed!</h2><a href="/">⬅️ Back</a>"#
        ))
}
