//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite, InMemory) will implement this trait.

use crate::domain::{Category, CategoryId, Payment, PaymentId};
use crate::error::RepoError;

/// The main repository port for the adoption backend.
///
/// Absence is expressed as `Option` / `bool` at this boundary; the service
/// layer maps it to a typed `NotFound`. Per-document writes are assumed
/// atomic by the backing store.
#[async_trait::async_trait]
pub trait AdoptionRepository: Send + Sync + 'static {
    // ─────────────────────────────────────────────────────────────────────────────
    // Category Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Inserts a new category. Fails with `Conflict` when the id is taken.
    async fn insert_category(&self, category: Category) -> Result<Category, RepoError>;

    /// Gets a category by id.
    async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>, RepoError>;

    /// Lists all categories, order store-defined.
    async fn list_categories(&self) -> Result<Vec<Category>, RepoError>;

    /// Replaces a stored category wholesale. Returns `None` when absent.
    async fn replace_category(&self, category: Category) -> Result<Option<Category>, RepoError>;

    /// Removes a category. Returns `false` when absent.
    async fn delete_category(&self, id: &CategoryId) -> Result<bool, RepoError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Saves a payment document, upserting by payment id.
    async fn save_payment(&self, payment: Payment) -> Result<Payment, RepoError>;

    /// Gets a payment document by id.
    async fn get_payment(&self, id: &PaymentId) -> Result<Option<Payment>, RepoError>;

    /// Lists all payment documents owned by a user.
    async fn payments_for_user(&self, user_id: &str) -> Result<Vec<Payment>, RepoError>;
}
