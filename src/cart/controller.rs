//! Cart endpoint adapter
//!
//! Maps wire carts to domain carts, hands them to exactly one use case and
//! maps the result back. Errors from the use cases pass through untouched;
//! turning them into HTTP statuses is [`crate::error::ApiError`]'s job.

use std::sync::Arc;

use async_trait::async_trait;

use super::{
    contract::{ApiResponse, CartsApi},
    dto::{CartDto, ProductDto},
    models::{Cart, CartId, Product},
    ports::{CartError, CreateCartUseCase, DeleteCartUseCase, GetCartUseCase, UpdateCartUseCase},
};

// =============================================================================
// Mapping
// =============================================================================

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: dto.id,
            description: dto.description,
            amount: dto.amount,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            id: product.id,
            description: product.description,
            amount: product.amount,
        }
    }
}

impl From<CartDto> for Cart {
    fn from(dto: CartDto) -> Self {
        Cart {
            id: dto.id,
            products: dto.products.into_iter().map(Product::from).collect(),
        }
    }
}

impl From<Cart> for CartDto {
    fn from(cart: Cart) -> Self {
        CartDto {
            id: cart.id,
            products: cart.products.into_iter().map(ProductDto::from).collect(),
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Implements [`CartsApi`] on top of the four cart use cases.
#[derive(Clone)]
pub struct CartController {
    create: Arc<dyn CreateCartUseCase>,
    get: Arc<dyn GetCartUseCase>,
    update: Arc<dyn UpdateCartUseCase>,
    delete: Arc<dyn DeleteCartUseCase>,
}

impl CartController {
    pub fn new(
        create: Arc<dyn CreateCartUseCase>,
        get: Arc<dyn GetCartUseCase>,
        update: Arc<dyn UpdateCartUseCase>,
        delete: Arc<dyn DeleteCartUseCase>,
    ) -> Self {
        Self {
            create,
            get,
            update,
            delete,
        }
    }

    /// Builds a controller whose four use cases are served by one backend.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: CreateCartUseCase + GetCartUseCase + UpdateCartUseCase + DeleteCartUseCase + 'static,
    {
        Self::new(backend.clone(), backend.clone(), backend.clone(), backend)
    }
}

#[async_trait]
impl CartsApi for CartController {
    async fn create_cart(&self, cart: CartDto) -> Result<ApiResponse<CartDto>, CartError> {
        let created = self.create.create_cart(cart.into()).await?;
        Ok(ApiResponse::created(created.into()))
    }

    async fn get_cart_by_id(&self, cart_id: CartId) -> Result<ApiResponse<CartDto>, CartError> {
        let cart = self.get.get_cart_by_id(cart_id).await?;
        Ok(ApiResponse::ok(cart.into()))
    }

    async fn update_cart(
        &self,
        cart_id: CartId,
        cart: CartDto,
    ) -> Result<ApiResponse<CartDto>, CartError> {
        // The path id and the body id are not reconciled here.
        let updated = self.update.update_cart(cart_id, cart.into()).await?;
        Ok(ApiResponse::ok(updated.into()))
    }

    async fn delete_cart(&self, cart_id: CartId) -> Result<ApiResponse<()>, CartError> {
        self.delete.delete_cart(cart_id).await?;
        Ok(ApiResponse::no_content())
    }
}
