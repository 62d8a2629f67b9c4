//! Shopping Cart Domain Module
//!
//! This module contains the carts resource, including:
//! - Domain models (Cart, Product) and their wire counterparts
//! - Use-case ports and an in-memory implementation
//! - The API contract and the adapter implementing it
//! - REST API handlers

pub mod contract;
pub mod controller;
pub mod dto;
pub mod handlers;
pub mod models;
pub mod ports;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
