use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use kitchenpos_core::{Money, ProductId};
use kitchenpos_products::{CreateProduct, Product};

use super::ServiceError;
use crate::store::ProductRepository;

/// Read representation of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id_typed(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

#[derive(Debug)]
pub struct ProductService<P> {
    products: P,
}

impl<P> ProductService<P>
where
    P: ProductRepository,
{
    pub fn new(products: P) -> Self {
        Self { products }
    }

    pub fn create(&self, request: CreateProduct) -> Result<ProductResponse, ServiceError> {
        debug!(product_id = %request.product_id, "creating product");
        let product = Product::create(request)?;
        let saved = self.products.save(product)?;
        info!(product_id = %saved.id_typed(), price = %saved.price(), "product created");
        Ok(ProductResponse::from(&saved))
    }

    pub fn list(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        Ok(self
            .products
            .find_all()?
            .iter()
            .map(ProductResponse::from)
            .collect())
    }
}
