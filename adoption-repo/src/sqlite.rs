//! SQLite repository adapter.
//!
//! Stores each record as a JSON document in a two-column table, modelling
//! the schema-flexible document store: the open attribute bag on categories
//! round-trips without schema changes.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use adoption_types::{
    AdoptionRepository, Category, CategoryId, Payment, PaymentId, RepoError,
};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_collections.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, RepoError> {
    serde_json::to_string(value).map_err(|e| RepoError::Database(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(doc: &str) -> Result<T, RepoError> {
    serde_json::from_str(doc).map_err(|e| RepoError::Database(e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl AdoptionRepository for SqliteRepo {
    async fn insert_category(&self, category: Category) -> Result<Category, RepoError> {
        let doc = encode(&category)?;

        let result = sqlx::query(r#"INSERT OR IGNORE INTO categories (id, doc) VALUES (?, ?)"#)
            .bind(category.id.as_str())
            .bind(&doc)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::Conflict(format!(
                "Category {} already exists",
                category.id
            )));
        }

        Ok(category)
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>, RepoError> {
        let doc: Option<String> =
            sqlx::query_scalar(r#"SELECT doc FROM categories WHERE id = ?"#)
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        doc.as_deref().map(decode).transpose()
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
        let docs: Vec<String> = sqlx::query_scalar(r#"SELECT doc FROM categories ORDER BY rowid"#)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        docs.iter().map(|d| decode(d)).collect()
    }

    async fn replace_category(&self, category: Category) -> Result<Option<Category>, RepoError> {
        let doc = encode(&category)?;

        let result = sqlx::query(r#"UPDATE categories SET doc = ? WHERE id = ?"#)
            .bind(&doc)
            .bind(category.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(category))
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM categories WHERE id = ?"#)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn save_payment(&self, payment: Payment) -> Result<Payment, RepoError> {
        let doc = encode(&payment)?;

        sqlx::query(
            r#"INSERT INTO payments (payment_id, user_id, doc) VALUES (?, ?, ?)
               ON CONFLICT(payment_id) DO UPDATE SET user_id = excluded.user_id, doc = excluded.doc"#,
        )
        .bind(payment.payment_id.as_str())
        .bind(&payment.user_id)
        .bind(&doc)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(payment)
    }

    async fn get_payment(&self, id: &PaymentId) -> Result<Option<Payment>, RepoError> {
        let doc: Option<String> =
            sqlx::query_scalar(r#"SELECT doc FROM payments WHERE payment_id = ?"#)
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        doc.as_deref().map(decode).transpose()
    }

    async fn payments_for_user(&self, user_id: &str) -> Result<Vec<Payment>, RepoError> {
        let docs: Vec<String> =
            sqlx::query_scalar(r#"SELECT doc FROM payments WHERE user_id = ? ORDER BY rowid"#)
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        docs.iter().map(|d| decode(d)).collect()
    }
}
