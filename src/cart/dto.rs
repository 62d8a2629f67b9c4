//! Wire-format models for the carts API
//!
//! These mirror the domain models field for field and only exist at the
//! JSON boundary.

use serde::{Deserialize, Serialize};

/// Cart as exchanged with clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDto {
    /// Cart identifier (`null` before creation)
    pub id: Option<i64>,

    /// Products in the order the client supplied them
    pub products: Vec<ProductDto>,
}

/// Product line as exchanged with clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    /// Product identifier
    pub id: i64,

    /// Human-readable description
    pub description: String,

    /// Quantity or price attached to the line
    pub amount: f64,
}
