//! Pure domain types for the adoption backend.

mod category;
mod payment;

pub use category::{Category, CategoryId};
pub use payment::{Payment, PaymentDetail, PaymentId};
