//! main.rs

use signup_service::configuration::get_configuration;
use signup_service::startup::Application;
use signup_service::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(&configuration).await?;
    tracing::info!(port = application.port(), "signup service running");
    application.run_until_stopped().await?;
    Ok(())
}
