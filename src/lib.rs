pub mod configuration;
pub mod domain;
pub mod probe;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
