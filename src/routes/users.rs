use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use futures::TryStreamExt;
use std::fmt::Write;

use crate::domain::Subscriber;
use crate::store::{Store, StoreError};

pub async fn users(store: web::Data<Store>) -> HttpResponse {
    match list_subscribers(&store).await {
        Ok(subscribers) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(render_subscriber_list(&subscribers)),
        Err(e) => {
            tracing::error!(error = ?e, "failed to list subscribers");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[tracing::instrument(name = "Fetching all subscribers", skip(store))]
async fn list_subscribers(store: &Store) -> Result<Vec<Subscriber>, StoreError> {
    let cursor = store.subscribers()?.find(None, None).await?;
    let subscribers = cursor.try_collect().await?;
    Ok(subscribers)
}

// Interpolated as-is, no HTML escaping.
fn render_subscriber_list(subscribers: &[Subscriber]) -> String {
    let mut body = String::from("<h2>📄 All Subscribers</h2><ul>");
    for subscriber in subscribers {
        write!(
            body,
            "<li><b>{}</b> – {}</li>",
            subscriber.name, subscriber.email
        )
        .unwrap();
    }
    body.push_str("</ul><br><a href='/'>⬅️ Back</a>");
    body
}
