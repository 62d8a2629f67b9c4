//! Shopping Cart API Library
//!
//! A REST resource for shopping carts: create, read, update and delete,
//! with wire/domain mapping in front of injectable use cases.

// Domain modules
pub mod cart;

// Infrastructure
pub mod config;
pub mod error;
pub mod healthcheck;
pub mod logging;
pub mod router;
pub mod shutdown;
