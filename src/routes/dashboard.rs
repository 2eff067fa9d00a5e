use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use std::fmt::Write;

use crate::probe::{ServiceProbe, ServiceReport};

/// Aggregated status page over the configured sibling services. Always
/// renders: dead services carry their error strings in their own section.
pub async fn dashboard(probe: web::Data<ServiceProbe>) -> HttpResponse {
    let reports = probe.survey().await;
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_dashboard(&reports))
}

fn render_dashboard(reports: &[ServiceReport]) -> String {
    let mut sections = String::new();
    for report in reports {
        write!(
            sections,
            r#"
    <div class="service">
        <h2>{}</h2>
        <p class="status">{}</p>
        <div>{}</div>
    </div>"#,
            report.name, report.status, report.users_html
        )
        .unwrap();
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Microservices Dashboard</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            background: #f5f5f5;
            padding: 20px;
        }}
        .service {{
            background: white;
            border-radius: 10px;
            padding: 20px;
            margin-bottom: 20px;
            box-shadow: 0 0 10px rgba(0,0,0,0.1);
        }}
        h2 {{
            color: #333;
        }}
        .status {{
            font-weight: bold;
            margin-bottom: 10px;
        }}
    </style>
</head>
<body>
    <h1>📊 Microservices Dashboard</h1>{sections}
</body>
</html>"#
    )
}
