use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kitchenpos_core::{
    DomainResult, Entity, EntityKind, MenuGroupId, MenuId, Money, ProductId,
};

use crate::menu_product::{MenuProduct, MenuProducts};

/// Requested line item: which product, how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuProductLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Command: CreateMenu.
///
/// Carries raw magnitudes; `Menu::create` turns them into validated value objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMenu {
    pub menu_id: MenuId,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: MenuGroupId,
    pub menu_products: Vec<MenuProductLine>,
}

/// Aggregate root: Menu.
///
/// The menu does not know product prices. Callers resolve them and use
/// [`Menu::is_more_expensive_than`] to enforce the price bound before persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    id: MenuId,
    name: String,
    price: Money,
    menu_group_id: MenuGroupId,
    menu_products: MenuProducts,
}

impl Menu {
    /// Build a transient (not yet validated against the catalog) menu.
    ///
    /// Fails with `InvalidValue` when the price or any quantity is negative.
    pub fn create(cmd: CreateMenu) -> DomainResult<Self> {
        let price = Money::of(cmd.price)?;

        let lines = cmd
            .menu_products
            .iter()
            .zip(1u32..)
            .map(|(line, seq)| MenuProduct::of(cmd.menu_id, seq, line.product_id, line.quantity))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            id: cmd.menu_id,
            name: cmd.name,
            price,
            menu_group_id: cmd.menu_group_id,
            menu_products: MenuProducts::new(lines),
        })
    }

    pub fn id_typed(&self) -> MenuId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn menu_group_id(&self) -> MenuGroupId {
        self.menu_group_id
    }

    pub fn menu_products(&self) -> &MenuProducts {
        &self.menu_products
    }

    /// True iff this menu's price strictly exceeds `candidate_total`.
    pub fn is_more_expensive_than(&self, candidate_total: Money) -> bool {
        self.price.is_greater_than(&candidate_total)
    }
}

impl Entity for Menu {
    type Id = MenuId;
    const KIND: EntityKind = EntityKind::Menu;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
