use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::FirstName;
use fake::Fake;
use futures::TryStreamExt;

use crate::helpers::{assert_is_redirect_to, spawn_app, spawn_app_without_store};

#[tokio::test]
async fn register_redirects_to_the_success_page_with_the_submitted_name() {
    // Arrange
    let app = spawn_app().await;
    let body = "name=Ursula&email=ursula%40musings.com";

    // Act
    let response = app.post_registration(body.into()).await;

    // Assert
    assert_is_redirect_to(&response, "/success?name=Ursula");
}

#[tokio::test]
async fn register_persists_the_submitted_fields() {
    // Arrange
    let app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    // Act
    app.post_registration(body.into()).await;

    // Assert
    let saved = app
        .subscribers()
        .find(None, None)
        .await
        .expect("Failed to query the subscribers collection.")
        .try_collect::<Vec<_>>()
        .await
        .expect("Failed to fetch saved subscribers.");
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "le guin");
    assert_eq!(saved[0].email, "ursula_le_guin@gmail.com");
    assert_eq!(saved[0].source, "signup-service");
}

#[tokio::test]
async fn register_accepts_generated_names_and_emails() {
    // Arrange
    let app = spawn_app().await;
    let name: String = FirstName().fake();
    let email: String = SafeEmail().fake();
    let body = serde_json::json!({
        "name": name,
        "email": email,
    });

    // Act
    let response = app.post_registration_form(&body).await;

    // Assert
    assert_is_redirect_to(&response, &format!("/success?name={}", name));
}

#[tokio::test]
async fn register_returns_400_when_data_is_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("name=le%20guin", "missing the email"),
        ("email=ursula_le_guin%40gmail.com", "missing the name"),
        ("", "missing both name and email"),
    ];

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_registration(invalid_body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }
}

#[tokio::test]
async fn register_returns_500_when_the_store_is_unavailable() {
    let app = spawn_app_without_store().await;

    let response = app
        .post_registration("name=le%20guin&email=ursula_le_guin%40gmail.com".into())
        .await;

    assert_eq!(500, response.status().as_u16());
}
