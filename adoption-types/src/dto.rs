//! Data Transfer Objects (DTOs) for requests.
//!
//! Responses serialize the domain types directly; only the inbound shapes
//! need dedicated structs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Category DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    /// Client-supplied identifier; generated by the server when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the category
    #[schema(example = "Dogs")]
    pub name: String,
    /// Any further descriptive attributes
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Request to replace a category's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    /// New name of the category
    #[schema(example = "Puppies")]
    pub name: String,
    /// Replacement descriptive attributes
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to record a payment detail for a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    /// Target payment document; resolved or created by user when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Identifier of the paying user
    #[schema(example = "user-42")]
    pub user_id: String,
    /// Username at time of payment
    #[schema(example = "alice")]
    pub username: String,
    /// Amount in smallest currency unit
    #[schema(example = 2500)]
    pub amount: i64,
    /// Optional free-form reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
