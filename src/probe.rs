//! src/probe.rs
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// A sibling service the dashboard keeps an eye on.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ServiceTarget {
    pub name: String,
    pub url: String,
}

#[derive(Debug)]
pub struct ServiceReport {
    pub name: String,
    pub status: String,
    pub users_html: String,
}

/// Polls each configured service's `/health` and `/users` endpoints for
/// the dashboard page. Failures are folded into the report rather than
/// propagated; one dead service never hides the others.
pub struct ServiceProbe {
    http_client: Client,
    targets: Vec<ServiceTarget>,
    health_timeout: Duration,
    users_timeout: Duration,
}

impl ServiceProbe {
    pub fn new(
        targets: Vec<ServiceTarget>,
        health_timeout: Duration,
        users_timeout: Duration,
    ) -> Self {
        Self {
            http_client: Client::new(),
            targets,
            health_timeout,
            users_timeout,
        }
    }

    /// One report per configured service, in configuration order.
    pub async fn survey(&self) -> Vec<ServiceReport> {
        let mut reports = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            reports.push(self.probe(target).await);
        }
        reports
    }

    #[tracing::instrument(name = "Probing a service", skip(self, target), fields(service = %target.name))]
    async fn probe(&self, target: &ServiceTarget) -> ServiceReport {
        match self.fetch(target).await {
            Ok((status, users_html)) => ServiceReport {
                name: target.name.clone(),
                status,
                users_html,
            },
            Err(e) => {
                tracing::warn!(error = %e, "service probe failed");
                ServiceReport {
                    name: target.name.clone(),
                    status: format!("❌ {}", e),
                    users_html: "❌ No data".to_string(),
                }
            }
        }
    }

    /// The health body is reported whatever its status code; the users
    /// body only counts when the service answered 200.
    async fn fetch(&self, target: &ServiceTarget) -> Result<(String, String), reqwest::Error> {
        let status = self
            .http_client
            .get(format!("{}/health", target.url))
            .timeout(self.health_timeout)
            .send()
            .await?
            .text()
            .await?;

        let users_response = self
            .http_client
            .get(format!("{}/users", target.url))
            .timeout(self.users_timeout)
            .send()
            .await?;
        let users_html = if users_response.status() == StatusCode::OK {
            users_response.text().await?
        } else {
            "❌ Failed to fetch users".to_string()
        };

        Ok((status, users_html))
    }
}
