//! Menu line items.

use kitchenpos_core::{DomainResult, MenuId, Money, ProductId, Quantity};

/// A (product, quantity) pairing inside exactly one menu.
///
/// Only [`crate::Menu::create`] builds these; the owning menu id and the 1-based
/// sequence number are fixed when the line is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuProduct {
    seq: u32,
    menu_id: MenuId,
    product_id: ProductId,
    quantity: Quantity,
}

impl MenuProduct {
    pub(crate) fn of(
        menu_id: MenuId,
        seq: u32,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<Self> {
        Ok(Self {
            seq,
            menu_id,
            product_id,
            quantity: Quantity::of(quantity)?,
        })
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }

    pub fn menu_id(&self) -> MenuId {
        self.menu_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Line total for the given (authoritative, current) product price.
    pub fn total_price(&self, product_price: Money) -> DomainResult<Money> {
        product_price.multiply(self.quantity)
    }
}

/// Ordered line items of a menu (input order is preserved).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuProducts(Vec<MenuProduct>);

impl MenuProducts {
    pub(crate) fn new(lines: Vec<MenuProduct>) -> Self {
        Self(lines)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, MenuProduct> {
        self.0.iter()
    }

}

impl<'a> IntoIterator for &'a MenuProducts {
    type Item = &'a MenuProduct;
    type IntoIter = core::slice::Iter<'a, MenuProduct>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
