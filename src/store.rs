//! src/store.rs
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use secrecy::ExposeSecret;

use crate::configuration::StoreSettings;
use crate::domain::Subscriber;

/// Handle to the subscriber collection, built once at startup and shared
/// read-mostly across workers.
///
/// Connection problems degrade the service instead of aborting it: the
/// handle remembers what went wrong for the welcome page to show, and
/// store-backed routes answer with `StoreError::Unavailable` until the
/// process is restarted.
pub struct Store {
    collection: Option<Collection<Subscriber>>,
    status: StoreStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Connected,
    ConnectFailed,
    PingFailed,
    Disabled,
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            StoreStatus::Connected => "✅ MongoDB connected",
            StoreStatus::ConnectFailed => "❌ MongoDB connection failed",
            StoreStatus::PingFailed => "❌ MongoDB ping failed",
            StoreStatus::Disabled => "❌ MongoDB not configured",
        };
        write!(f, "{}", message)
    }
}

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("the document store is not available")]
    Unavailable,
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

impl Store {
    /// One timeout-bounded connection and ping attempt; no retries.
    /// Never fails: whatever goes wrong is logged and folded into the
    /// status line shown on the welcome page.
    pub async fn connect(settings: &StoreSettings) -> Self {
        let uri = match settings.uri.as_ref() {
            Some(uri) => uri,
            None => {
                tracing::warn!("no store URI configured; store-backed features are disabled");
                return Self::disabled();
            }
        };

        let mut options = match ClientOptions::parse(uri.expose_secret()).await {
            Ok(options) => options,
            Err(e) => {
                tracing::error!(error = ?e, "failed to parse the store connection string");
                return Self {
                    collection: None,
                    status: StoreStatus::ConnectFailed,
                };
            }
        };
        options.app_name = Some("signup-service".into());
        options.connect_timeout = Some(settings.connection_timeout());
        options.server_selection_timeout = Some(settings.connection_timeout());

        let client = match Client::with_options(options) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(error = ?e, "failed to build the store client");
                return Self {
                    collection: None,
                    status: StoreStatus::ConnectFailed,
                };
            }
        };

        if let Err(e) = client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
        {
            tracing::error!(error = ?e, "failed to ping the store");
            return Self {
                collection: None,
                status: StoreStatus::PingFailed,
            };
        }

        tracing::info!(
            database = %settings.database_name,
            collection = %settings.collection_name,
            "connected to the document store"
        );
        Self {
            collection: Some(
                client
                    .database(&settings.database_name)
                    .collection(&settings.collection_name),
            ),
            status: StoreStatus::Connected,
        }
    }

    pub fn disabled() -> Self {
        Self {
            collection: None,
            status: StoreStatus::Disabled,
        }
    }

    pub fn status(&self) -> StoreStatus {
        self.status
    }

    pub fn subscribers(&self) -> Result<&Collection<Subscriber>, StoreError> {
        self.collection.as_ref().ok_or(StoreError::Unavailable)
    }
}
