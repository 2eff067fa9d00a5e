use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::store::{Store, StoreError};

/// The welcome page renders whatever the store status is; a store that
/// cannot answer shows up as a zero count, never as an error page.
pub async fn home(store: web::Data<Store>) -> HttpResponse {
    let subscriber_count = match count_subscribers(&store).await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(error = ?e, "failed to count subscribers");
            0
        }
    };

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_welcome_page(
            &store.status().to_string(),
            subscriber_count,
        ))
}

#[tracing::instrument(name = "Counting subscribers", skip(store))]
async fn count_subscribers(store: &Store) -> Result<u64, StoreError> {
    let count = store.subscribers()?.count_documents(None, None).await?;
    Ok(count)
}

fn render_welcome_page(store_status: &str, subscriber_count: u64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Signup Service</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            background: linear-gradient(135deg, #667eea, #764ba2);
            color: white;
            text-align: center;
            padding: 50px;
        }}
        input, button {{
            padding: 10px;
            border-radius: 5px;
            border: none;
            margin: 5px;
        }}
        button {{
            background: white;
            color: #764ba2;
            font-weight: bold;
            cursor: pointer;
        }}
        a {{
            color: #ffffff;
            font-weight: bold;
            text-decoration: underline;
        }}
    </style>
</head>
<body>
    <h1>👋 Welcome to the Signup Service</h1>
    <p>{store_status}</p>
    <p>📄 Total Subscribers: {subscriber_count}</p>

    <form action="/register" method="POST">
        <input name="name" placeholder="Enter Your Name" required />
        <input name="email" type="email" placeholder="Enter Your Email" required />
        <button type="submit">Subscribe</button>
    </form>

    <br>
    <a href="/users">🔍 View all users</a>
</body>
</html>"#
    )
}
