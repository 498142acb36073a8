//! # Adoption Repository
//!
//! Concrete repository implementations (adapters) for the adoption backend.
//! This crate provides store adapters that implement the `AdoptionRepository`
//! port: an always-available in-memory adapter and a SQLite-backed
//! document store (feature `sqlite`).

use async_trait::async_trait;
use adoption_types::{
    AdoptionRepository, Category, CategoryId, Payment, PaymentId, RepoError,
};

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod sqlite_tests;

pub use memory::MemoryRepo;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepo;

/// Unified repository wrapper dispatching to the configured adapter.
pub enum Repo {
    Memory(MemoryRepo),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteRepo),
}

/// Build and initialize a repository from a database URL.
///
/// `memory://` selects the in-memory adapter; anything else is treated as a
/// SQLite URL, connected and migrated before the `Repo` is returned.
///
/// # Examples
///
/// ```ignore
/// // In-memory (tests, local development)
/// let repo = build_repo("memory://").await?;
///
/// // SQLite (with `sqlite` feature)
/// let repo = build_repo("sqlite://adoption.db?mode=rwc").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<Repo> {
    if database_url.starts_with("memory://") {
        tracing::info!("Using in-memory repository");
        return Ok(Repo::Memory(MemoryRepo::new()));
    }

    build_sqlite(database_url).await
}

#[cfg(feature = "sqlite")]
async fn build_sqlite(database_url: &str) -> anyhow::Result<Repo> {
    let inner = sqlite::SqliteRepo::new(database_url).await?;
    Ok(Repo::Sqlite(inner))
}

#[cfg(not(feature = "sqlite"))]
async fn build_sqlite(database_url: &str) -> anyhow::Result<Repo> {
    anyhow::bail!(
        "Unsupported database URL {database_url:?}: enable the `sqlite` feature or use `memory://`"
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Implement AdoptionRepository for Repo (delegation)
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! delegate {
    ($self:ident, $inner:ident => $call:expr) => {
        match $self {
            Repo::Memory($inner) => $call,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite($inner) => $call,
        }
    };
}

#[async_trait]
impl AdoptionRepository for Repo {
    async fn insert_category(&self, category: Category) -> Result<Category, RepoError> {
        delegate!(self, inner => inner.insert_category(category).await)
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>, RepoError> {
        delegate!(self, inner => inner.get_category(id).await)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
        delegate!(self, inner => inner.list_categories().await)
    }

    async fn replace_category(&self, category: Category) -> Result<Option<Category>, RepoError> {
        delegate!(self, inner => inner.replace_category(category).await)
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<bool, RepoError> {
        delegate!(self, inner => inner.delete_category(id).await)
    }

    async fn save_payment(&self, payment: Payment) -> Result<Payment, RepoError> {
        delegate!(self, inner => inner.save_payment(payment).await)
    }

    async fn get_payment(&self, id: &PaymentId) -> Result<Option<Payment>, RepoError> {
        delegate!(self, inner => inner.get_payment(id).await)
    }

    async fn payments_for_user(&self, user_id: &str) -> Result<Vec<Payment>, RepoError> {
        delegate!(self, inner => inner.payments_for_user(user_id).await)
    }
}
