//! In-memory cart use cases
//!
//! Backs all four cart ports with a [`DashMap`], which allows concurrent
//! access without external Mutexes. Identifiers come from a process-wide
//! sequence starting at 1.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};

use super::{
    models::{Cart, CartId},
    ports::{CartError, CreateCartUseCase, DeleteCartUseCase, GetCartUseCase, UpdateCartUseCase},
};

/// Concurrent in-memory cart storage
#[derive(Debug)]
pub struct InMemoryCartStore {
    carts: DashMap<CartId, Cart>,
    next_id: AtomicI64,
}

impl Default for InMemoryCartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self {
            carts: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of carts currently stored
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    fn allocate_id(&self) -> CartId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl CreateCartUseCase for InMemoryCartStore {
    async fn create_cart(&self, cart: Cart) -> Result<Cart, CartError> {
        // Client-supplied ids are ignored; the store owns the sequence.
        let id = self.allocate_id();
        let created = cart.with_id(id);
        self.carts.insert(id, created.clone());
        Ok(created)
    }
}

#[async_trait]
impl GetCartUseCase for InMemoryCartStore {
    async fn get_cart_by_id(&self, cart_id: CartId) -> Result<Cart, CartError> {
        self.carts
            .get(&cart_id)
            .map(|entry| entry.value().clone())
            .ok_or(CartError::NotFound(cart_id))
    }
}

#[async_trait]
impl UpdateCartUseCase for InMemoryCartStore {
    async fn update_cart(&self, cart_id: CartId, cart: Cart) -> Result<Cart, CartError> {
        match self.carts.entry(cart_id) {
            Entry::Occupied(mut entry) => {
                // Path id wins over whatever the body carried.
                let updated = cart.with_id(cart_id);
                entry.insert(updated.clone());
                Ok(updated)
            }
            Entry::Vacant(_) => Err(CartError::NotFound(cart_id)),
        }
    }
}

#[async_trait]
impl DeleteCartUseCase for InMemoryCartStore {
    async fn delete_cart(&self, cart_id: CartId) -> Result<(), CartError> {
        self.carts
            .remove(&cart_id)
            .map(|_| ())
            .ok_or(CartError::NotFound(cart_id))
    }
}
