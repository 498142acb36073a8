//! # Adoption Hex
//!
//! Application service layer and HTTP adapter for the adoption backend.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates domain operations)
//! - `inbound/` - HTTP adapter (Axum server, CORS policy)
//!
//! The service is generic over `R: AdoptionRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
mod openapi;
pub mod service;


pub use service::AdoptionService;
