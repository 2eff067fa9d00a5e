//! src/startup.rs
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::probe::ServiceProbe;
use crate::routes::{dashboard, health, home, register, success, users};
use crate::store::Store;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// A store that cannot be reached degrades the application; a port
    /// that cannot be bound fails the build.
    pub async fn build(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let store = Store::connect(&configuration.store).await;
        let probe = ServiceProbe::new(
            configuration.dashboard.services.clone(),
            configuration.dashboard.health_timeout(),
            configuration.dashboard.users_timeout(),
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener =
            TcpListener::bind(&address).with_context(|| format!("failed to bind {}", address))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, store, probe)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    store: Store,
    probe: ServiceProbe,
) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);
    let probe = web::Data::new(probe);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/register", web::post().to(register))
            .route("/success", web::get().to(success))
            .route("/users", web::get().to(users))
            .route("/health", web::get().to(health))
            .route("/dashboard", web::get().to(dashboard))
            .app_data(store.clone())
            .app_data(probe.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
