use crate::helpers::{spawn_app, spawn_app_without_store};

#[tokio::test]
async fn home_returns_200_with_an_html_welcome_page() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_home().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let content_type = response
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(content_type.starts_with("text/html"));
    let html = response.text().await.unwrap();
    assert!(html.contains("👋 Welcome to the Signup Service"));
    assert!(html.contains("✅ MongoDB connected"));
}

#[tokio::test]
async fn home_reports_a_zero_count_before_anyone_registers() {
    let app = spawn_app().await;

    let html = app.get_home_html().await;

    assert!(html.contains("📄 Total Subscribers: 0"));
}

#[tokio::test]
async fn home_counts_each_registered_subscriber() {
    let app = spawn_app().await;
    app.post_registration("name=le%20guin&email=ursula_le_guin%40gmail.com".into())
        .await;
    app.post_registration("name=bradbury&email=ray%40bradbury.com".into())
        .await;

    let html = app.get_home_html().await;

    assert!(html.contains("📄 Total Subscribers: 2"));
}

#[tokio::test]
async fn home_still_renders_when_the_store_is_unreachable() {
    let app = spawn_app_without_store().await;

    let response = app.get_home().await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("❌ MongoDB not configured"));
    assert!(html.contains("📄 Total Subscribers: 0"));
}
