use crate::helpers::{spawn_app, spawn_app_without_store};

#[tokio::test]
async fn success_thanks_the_subscriber_by_name() {
    // Arrange
    let app = spawn_app_without_store().await;

    // Act
    let html = app.get_success_html("?name=Ursula").await;

    // Assert
    assert!(html.contains("Thank you, <b>Ursula</b>! You're subscribed!"));
}

#[tokio::test]
async fn success_renders_an_empty_name_when_the_query_is_missing() {
    let app = spawn_app_without_store().await;

    let html = app.get_success_html("").await;

    assert!(html.contains("Thank you, <b></b>!"));
}

#[tokio::test]
async fn the_registration_flow_lands_on_a_personalised_success_page() {
    // Arrange
    let app = spawn_app().await;

    // Act - Part 1 - Register
    let response = app
        .post_registration("name=Ursula&email=ursula%40musings.com".into())
        .await;
    let location = response
        .headers()
        .get("Location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    // Act - Part 2 - Follow the redirect
    let html = app
        .get_success_html(location.trim_start_matches("/success"))
        .await;

    // Assert
    assert!(html.contains("Thank you, <b>Ursula</b>! You're subscribed!"));
}
