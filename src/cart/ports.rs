//! Use-case ports consumed by the cart adapter
//!
//! Each port covers exactly one business operation. The adapter only ever
//! sees these traits, so production code can plug in any backing store and
//! tests can swap in the generated `Mock*` doubles.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use super::models::{Cart, CartId};

/// Failures raised by the cart use cases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// No cart exists under the given identifier
    #[error("cart {0} not found")]
    NotFound(CartId),

    /// The use case refused the cart in its current state
    #[error("invalid cart: {0}")]
    Invalid(String),

    /// The backing store failed
    #[error("cart store failure: {0}")]
    Internal(String),
}

/// Creates a new cart.
#[automock]
#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    async fn create_cart(&self, cart: Cart) -> Result<Cart, CartError>;
}

/// Fetches a cart by its identifier.
#[automock]
#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn get_cart_by_id(&self, cart_id: CartId) -> Result<Cart, CartError>;
}

/// Replaces the contents of an existing cart.
#[automock]
#[async_trait]
pub trait UpdateCartUseCase: Send + Sync {
    async fn update_cart(&self, cart_id: CartId, cart: Cart) -> Result<Cart, CartError>;
}

/// Removes a cart.
#[automock]
#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    async fn delete_cart(&self, cart_id: CartId) -> Result<(), CartError>;
}
