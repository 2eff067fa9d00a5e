use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};

use crate::domain::Subscriber;
use crate::store::{Store, StoreError};

#[derive(serde::Deserialize)]
pub struct FormData {
    name: String,
    email: String,
}

#[tracing::instrument(
    name = "Registering a new subscriber",
    skip(form, store),
    fields(
        subscriber_name = %form.name,
        subscriber_email = %form.email
    )
)]
pub async fn register(form: web::Form<FormData>, store: web::Data<Store>) -> HttpResponse {
    let form = form.0;
    let subscriber = Subscriber::new(form.name, form.email);
    match insert_subscriber(&store, &subscriber).await {
        Ok(()) => HttpResponse::Found()
            .insert_header((LOCATION, format!("/success?name={}", subscriber.name)))
            .finish(),
        Err(e) => {
            tracing::error!(error = ?e, "failed to save the new subscriber");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[tracing::instrument(
    name = "Saving new subscriber details in the store",
    skip(store, subscriber)
)]
async fn insert_subscriber(store: &Store, subscriber: &Subscriber) -> Result<(), StoreError> {
    store.subscribers()?.insert_one(subscriber, None).await?;
    Ok(())
}
