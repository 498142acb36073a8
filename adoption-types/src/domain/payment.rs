//! Payment domain model.
//!
//! A `Payment` is one document per user holding that user's accumulated
//! payment details. Append-only: details are added, never edited or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a Payment document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Generates a new random PaymentId (UUIDv4 rendered as a string).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a PaymentId from an existing string, rejecting blank input.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.trim().is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A single transactional entry within a payment document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentDetail {
    /// Amount in the smallest currency unit (e.g., cents)
    #[schema(example = 2500)]
    pub amount: i64,
    /// Optional free-form reference for the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// When the entry was recorded
    pub paid_at: DateTime<Utc>,
}

impl PaymentDetail {
    /// Creates a detail stamped with the current time.
    pub fn new(amount: i64, reference: Option<String>) -> Self {
        Self {
            amount,
            reference,
            paid_at: Utc::now(),
        }
    }
}

/// A user's payment history document.
///
/// Field names match the persisted document shape
/// (`paymentId` / `userId` / `payments`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    /// Unique document identifier
    #[serde(rename = "paymentId")]
    pub payment_id: PaymentId,
    /// Identifier of the owning user
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Username captured at time of payment (denormalized)
    pub username: String,
    /// Accumulated payment details, append-only
    pub payments: Vec<PaymentDetail>,
}

impl Payment {
    /// Creates an empty payment document for a user.
    ///
    /// # Validation
    /// - User id cannot be blank
    pub fn new(payment_id: PaymentId, user_id: String, username: String) -> Result<Self, DomainError> {
        if user_id.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "User id cannot be empty".into(),
            ));
        }

        Ok(Self {
            payment_id,
            user_id,
            username,
            payments: Vec::new(),
        })
    }

    /// Appends a detail to the document.
    pub fn append(&mut self, detail: PaymentDetail) {
        self.payments.push(detail);
    }
}
