//! Adoption Application Service
//!
//! Orchestrates domain operations through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use adoption_types::{
    AdoptionRepository, AppError, Category, CategoryId, CreateCategoryRequest, Payment,
    PaymentDetail, PaymentId, RecordPaymentRequest, UpdateCategoryRequest,
};

/// Application service for category and payment operations.
///
/// Generic over `R: AdoptionRepository` - the adapter is injected at compile
/// time. This enables:
/// - Swapping repositories without code changes
/// - Testing with an in-memory repo
/// - Compile-time checks for port implementation
pub struct AdoptionService<R: AdoptionRepository> {
    repo: R,
}

impl<R: AdoptionRepository> AdoptionService<R> {
    /// Creates a new adoption service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Category Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a new category.
    ///
    /// Uses the client-supplied id when present, otherwise generates one.
    pub async fn create_category(
        &self,
        req: CreateCategoryRequest,
    ) -> Result<Category, AppError> {
        let id = match req.id {
            Some(id) => CategoryId::parse(&id)
                .map_err(|_| AppError::BadRequest("Invalid category ID".into()))?,
            None => CategoryId::generate(),
        };

        let category = Category::new(id, req.name, req.extra)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        self.repo.insert_category(category).await.map_err(Into::into)
    }

    /// Gets a category by id. Absence is a typed `NotFound`, never a null.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, AppError> {
        self.repo
            .get_category(&id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Category {}", id))))
    }

    /// Lists all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repo.list_categories().await.map_err(Into::into)
    }

    /// Replaces a category's mutable fields, preserving the identifier.
    ///
    /// Fails with `NotFound` before applying any mutation when the id is
    /// absent.
    pub async fn update_category(
        &self,
        id: CategoryId,
        req: UpdateCategoryRequest,
    ) -> Result<Category, AppError> {
        let mut category = self.get_category(id.clone()).await?;

        category
            .apply(req.name, req.extra)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        self.repo
            .replace_category(category)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Category {}", id))))
    }

    /// Deletes a category. A second delete of the same id fails with
    /// `NotFound` rather than silently succeeding.
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), AppError> {
        let removed = self.repo.delete_category(&id).await?;

        if removed {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Category {}", id)))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Records a payment detail for a user.
    ///
    /// Appends to the explicitly named document when `payment_id` is given,
    /// otherwise to the user's existing document, creating one on first
    /// payment.
    pub async fn record_payment(&self, req: RecordPaymentRequest) -> Result<Payment, AppError> {
        if req.amount <= 0 {
            return Err(AppError::BadRequest("Amount must be positive".into()));
        }

        let detail = PaymentDetail::new(req.amount, req.reference);

        let mut payment = match req.payment_id {
            Some(id) => {
                let payment_id = PaymentId::parse(&id)
                    .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;
                self.repo
                    .get_payment(&payment_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Payment {}", payment_id)))?
            }
            None => match self.repo.payments_for_user(&req.user_id).await?.into_iter().next() {
                Some(existing) => existing,
                None => Payment::new(PaymentId::generate(), req.user_id, req.username)
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            },
        };

        payment.append(detail);
        self.repo.save_payment(payment).await.map_err(Into::into)
    }

    /// Lists a user's payment documents. An unknown user yields an empty
    /// list, matching the collaborator contract.
    pub async fn list_payments(&self, user_id: &str) -> Result<Vec<Payment>, AppError> {
        self.repo.payments_for_user(user_id).await.map_err(Into::into)
    }
}
