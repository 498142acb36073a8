//! In-memory repository adapter.
//!
//! Backed by `DashMap`, so per-document operations are atomic without an
//! outer lock. Used for tests and for running without a database.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use adoption_types::{
    AdoptionRepository, Category, CategoryId, Payment, PaymentId, RepoError,
};

/// In-memory repository implementation.
#[derive(Default)]
pub struct MemoryRepo {
    categories: DashMap<String, Category>,
    payments: DashMap<String, Payment>,
}

impl MemoryRepo {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdoptionRepository for MemoryRepo {
    async fn insert_category(&self, category: Category) -> Result<Category, RepoError> {
        match self.categories.entry(category.id.as_str().to_string()) {
            Entry::Occupied(_) => Err(RepoError::Conflict(format!(
                "Category {} already exists",
                category.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(category.clone());
                Ok(category)
            }
        }
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>, RepoError> {
        Ok(self.categories.get(id.as_str()).map(|c| c.value().clone()))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.categories.iter().map(|c| c.value().clone()).collect())
    }

    async fn replace_category(&self, category: Category) -> Result<Option<Category>, RepoError> {
        match self.categories.entry(category.id.as_str().to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(category.clone());
                Ok(Some(category))
            }
            Entry::Vacant(_) => Ok(None),
        }
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<bool, RepoError> {
        Ok(self.categories.remove(id.as_str()).is_some())
    }

    async fn save_payment(&self, payment: Payment) -> Result<Payment, RepoError> {
        self.payments
            .insert(payment.payment_id.as_str().to_string(), payment.clone());
        Ok(payment)
    }

    async fn get_payment(&self, id: &PaymentId) -> Result<Option<Payment>, RepoError> {
        Ok(self.payments.get(id.as_str()).map(|p| p.value().clone()))
    }

    async fn payments_for_user(&self, user_id: &str) -> Result<Vec<Payment>, RepoError> {
        Ok(self
            .payments
            .iter()
            .filter(|p| p.value().user_id == user_id)
            .map(|p| p.value().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category::new(CategoryId::parse(id).unwrap(), name.into(), Default::default()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_duplicate_conflicts() {
        let repo = MemoryRepo::new();
        repo.insert_category(category("c1", "Dogs")).await.unwrap();

        let result = repo.insert_category(category("c1", "Cats")).await;
        assert!(matches!(result, Err(RepoError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_replace_absent_returns_none() {
        let repo = MemoryRepo::new();
        let replaced = repo.replace_category(category("ghost", "Dogs")).await.unwrap();
        assert!(replaced.is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_returns_false() {
        let repo = MemoryRepo::new();
        let removed = repo
            .delete_category(&CategoryId::parse("ghost").unwrap())
            .await
            .unwrap();
        assert!(!removed);
    }

    #[tokio::test]
    async fn test_payments_filtered_by_user() {
        let repo = MemoryRepo::new();
        let a = Payment::new(PaymentId::parse("p1").unwrap(), "u1".into(), "alice".into()).unwrap();
        let b = Payment::new(PaymentId::parse("p2").unwrap(), "u2".into(), "bob".into()).unwrap();
        repo.save_payment(a).await.unwrap();
        repo.save_payment(b).await.unwrap();

        let for_u1 = repo.payments_for_user("u1").await.unwrap();
        assert_eq!(for_u1.len(), 1);
        assert_eq!(for_u1[0].username, "alice");
    }
}
