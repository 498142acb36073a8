//! Inbound HTTP adapter (Axum).

pub mod cors;
pub mod handlers;
pub mod server;

pub use cors::CorsPolicy;
pub use server::HttpServer;
