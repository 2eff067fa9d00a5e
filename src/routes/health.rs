use actix_web::HttpResponse;

/// Fixed plaintext body; load balancers and the dashboard poll this.
pub const HEALTH_MESSAGE: &str = "✅ signup-service healthy";

pub async fn health() -> HttpResponse {
    tracing::debug!("health check received");
    HttpResponse::Ok().body(HEALTH_MESSAGE)
}
