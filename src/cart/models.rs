//! Shopping Cart Domain Models
//!
//! Plain value carriers used by the use cases. They know nothing about the
//! wire format; see [`super::dto`] for the shapes exchanged with clients.

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a cart
pub type CartId = i64;

/// Identifier of a product
pub type ProductId = i64;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A product line held in a cart
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Human-readable description
    pub description: String,

    /// Quantity or price attached to the line
    pub amount: f64,
}

impl Product {
    pub fn new(id: ProductId, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
        }
    }
}

/// A shopping cart
///
/// `id` is `None` until a use case assigns one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    /// Cart identifier
    pub id: Option<CartId>,

    /// Products in insertion order
    pub products: Vec<Product>,
}

impl Cart {
    pub fn new(id: Option<CartId>, products: Vec<Product>) -> Self {
        Self { id, products }
    }

    /// Returns a copy of this cart carrying `id`.
    pub fn with_id(self, id: CartId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
