use rust_decimal::Decimal;
use serde::Deserialize;

use kitchenpos_core::{DomainError, MenuGroupId, MenuId, ProductId};
use kitchenpos_menu_groups::CreateMenuGroup;
use kitchenpos_menus::{CreateMenu, MenuProductLine};
use kitchenpos_products::CreateProduct;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateMenuGroupRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MenuProductRequest {
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateMenuRequest {
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: String,
    #[serde(default)]
    pub menu_products: Vec<MenuProductRequest>,
}

// -------------------------
// Request -> command mapping
// -------------------------

impl CreateProductRequest {
    pub fn into_command(self, product_id: ProductId) -> CreateProduct {
        CreateProduct {
            product_id,
            name: self.name,
            price: self.price,
        }
    }
}

impl CreateMenuGroupRequest {
    pub fn into_command(self, menu_group_id: MenuGroupId) -> CreateMenuGroup {
        CreateMenuGroup {
            menu_group_id,
            name: self.name,
        }
    }
}

impl CreateMenuRequest {
    /// Ids arrive as text; a malformed one is rejected before the workflow runs.
    pub fn into_command(self, menu_id: MenuId) -> Result<CreateMenu, DomainError> {
        let menu_group_id: MenuGroupId = self.menu_group_id.parse()?;
        let menu_products = self
            .menu_products
            .into_iter()
            .map(|line| -> Result<MenuProductLine, DomainError> {
                Ok(MenuProductLine {
                    product_id: line.product_id.parse::<ProductId>()?,
                    quantity: line.quantity,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CreateMenu {
            menu_id,
            name: self.name,
            price: self.price,
            menu_group_id,
            menu_products,
        })
    }
}
