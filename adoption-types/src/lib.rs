//! # Adoption Types
//!
//! Domain types and port traits for the pet-adoption backend.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Category, Payment)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Category, CategoryId, Payment, PaymentDetail, PaymentId};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::AdoptionRepository;
