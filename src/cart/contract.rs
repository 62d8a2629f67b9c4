//! Carts API contract
//!
//! The four operations exposed under `/carts`, independent of the HTTP
//! framework. Handlers in [`super::handlers`] drive any implementation of
//! [`CartsApi`]; [`super::controller::CartController`] is the production one.

use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mockall::automock;

use super::{dto::CartDto, models::CartId, ports::CartError};

/// A status code paired with the body to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T> ApiResponse<T> {
    /// `201 Created` with `body`
    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }

    /// `200 OK` with `body`
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

impl ApiResponse<()> {
    /// `204 No Content`
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: (),
        }
    }
}

impl IntoResponse for ApiResponse<CartDto> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl IntoResponse for ApiResponse<()> {
    fn into_response(self) -> Response {
        self.status.into_response()
    }
}

/// Operations of the carts resource.
#[automock]
#[async_trait]
pub trait CartsApi: Send + Sync {
    /// Creates a cart; answers `201 Created`.
    async fn create_cart(&self, cart: CartDto) -> Result<ApiResponse<CartDto>, CartError>;

    /// Fetches a cart; answers `200 OK`.
    async fn get_cart_by_id(&self, cart_id: CartId) -> Result<ApiResponse<CartDto>, CartError>;

    /// Replaces a cart; answers `200 OK`.
    async fn update_cart(
        &self,
        cart_id: CartId,
        cart: CartDto,
    ) -> Result<ApiResponse<CartDto>, CartError>;

    /// Removes a cart; answers `204 No Content`.
    async fn delete_cart(&self, cart_id: CartId) -> Result<ApiResponse<()>, CartError>;
}
