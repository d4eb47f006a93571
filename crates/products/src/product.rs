use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kitchenpos_core::{DomainError, DomainResult, Entity, EntityKind, Money, ProductId};

/// Entity: Product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

/// Command: CreateProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProduct {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn create(cmd: CreateProduct) -> DomainResult<Self> {
        if cmd.name.trim().is_empty() {
            return Err(DomainError::invalid_value("product name cannot be empty"));
        }
        let price = Money::of(cmd.price)?;

        Ok(Self {
            id: cmd.product_id,
            name: cmd.name,
            price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
