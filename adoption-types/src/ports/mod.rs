//! Port traits implemented by adapters.

mod repository;

pub use repository::AdoptionRepository;
