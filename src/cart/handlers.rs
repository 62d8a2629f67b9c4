//! REST API handlers for shopping cart operations
//!
//! Extracts and checks the request shape, then hands off to the
//! [`CartsApi`](super::contract::CartsApi) held in the shared state.

use super::{contract::ApiResponse, dto::CartDto, models::CartId, state::SharedState};
use crate::error::ApiError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/carts", post(create_cart)).route(
        "/carts/:id",
        get(get_cart_by_id).put(update_cart).delete(delete_cart),
    )
}

/// Endpoint: POST /carts
async fn create_cart(
    State(state): State<SharedState>,
    body: Result<Json<CartDto>, JsonRejection>,
) -> Result<ApiResponse<CartDto>, ApiError> {
    let Json(cart) = body?;

    Ok(state.carts.create_cart(cart).await?)
}

/// Endpoint: GET /carts/:id
async fn get_cart_by_id(
    State(state): State<SharedState>,
    path: Result<Path<CartId>, PathRejection>,
) -> Result<ApiResponse<CartDto>, ApiError> {
    let Path(cart_id) = path?;

    Ok(state.carts.get_cart_by_id(cart_id).await?)
}

/// Endpoint: PUT /carts/:id
async fn update_cart(
    State(state): State<SharedState>,
    path: Result<Path<CartId>, PathRejection>,
    body: Result<Json<CartDto>, JsonRejection>,
) -> Result<ApiResponse<CartDto>, ApiError> {
    let Path(cart_id) = path?;
    let Json(cart) = body?;

    Ok(state.carts.update_cart(cart_id, cart).await?)
}

/// Endpoint: DELETE /carts/:id
async fn delete_cart(
    State(state): State<SharedState>,
    path: Result<Path<CartId>, PathRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let Path(cart_id) = path?;

    Ok(state.carts.delete_cart(cart_id).await?)
}
