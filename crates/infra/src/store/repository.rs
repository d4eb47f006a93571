//! Repository traits consumed by the application services.
//!
//! Services depend on these traits only, so tests can swap in doubles and a
//! database-backed implementation can replace `InMemoryStore` without touching them.

use std::sync::Arc;

use kitchenpos_core::{Entity, MenuGroupId, MenuId, ProductId};
use kitchenpos_menu_groups::MenuGroup;
use kitchenpos_menus::Menu;
use kitchenpos_products::Product;

use super::{InMemoryStore, StoreError};

pub trait MenuGroupRepository: Send + Sync {
    fn exists_by_id(&self, id: &MenuGroupId) -> Result<bool, StoreError>;
    fn save(&self, menu_group: MenuGroup) -> Result<MenuGroup, StoreError>;
    fn find_all(&self) -> Result<Vec<MenuGroup>, StoreError>;
}

pub trait ProductRepository: Send + Sync {
    fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;
    fn save(&self, product: Product) -> Result<Product, StoreError>;
    fn find_all(&self) -> Result<Vec<Product>, StoreError>;
}

/// Menu persistence. `save` must store the menu and all of its line items as one unit.
pub trait MenuRepository: Send + Sync {
    fn save(&self, menu: Menu) -> Result<Menu, StoreError>;
    fn find_by_id(&self, id: &MenuId) -> Result<Option<Menu>, StoreError>;
    fn find_all(&self) -> Result<Vec<Menu>, StoreError>;
}

impl<R> MenuGroupRepository for Arc<R>
where
    R: MenuGroupRepository + ?Sized,
{
    fn exists_by_id(&self, id: &MenuGroupId) -> Result<bool, StoreError> {
        (**self).exists_by_id(id)
    }

    fn save(&self, menu_group: MenuGroup) -> Result<MenuGroup, StoreError> {
        (**self).save(menu_group)
    }

    fn find_all(&self) -> Result<Vec<MenuGroup>, StoreError> {
        (**self).find_all()
    }
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id)
    }

    fn save(&self, product: Product) -> Result<Product, StoreError> {
        (**self).save(product)
    }

    fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_all()
    }
}

impl<R> MenuRepository for Arc<R>
where
    R: MenuRepository + ?Sized,
{
    fn save(&self, menu: Menu) -> Result<Menu, StoreError> {
        (**self).save(menu)
    }

    fn find_by_id(&self, id: &MenuId) -> Result<Option<Menu>, StoreError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<Menu>, StoreError> {
        (**self).find_all()
    }
}

impl MenuGroupRepository for InMemoryStore<MenuGroupId, MenuGroup> {
    fn exists_by_id(&self, id: &MenuGroupId) -> Result<bool, StoreError> {
        self.contains(id)
    }

    fn save(&self, menu_group: MenuGroup) -> Result<MenuGroup, StoreError> {
        self.upsert(*menu_group.id(), menu_group.clone())?;
        Ok(menu_group)
    }

    fn find_all(&self) -> Result<Vec<MenuGroup>, StoreError> {
        self.list()
    }
}

impl ProductRepository for InMemoryStore<ProductId, Product> {
    fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        self.get(id)
    }

    fn save(&self, product: Product) -> Result<Product, StoreError> {
        self.upsert(*product.id(), product.clone())?;
        Ok(product)
    }

    fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        self.list()
    }
}

impl MenuRepository for InMemoryStore<MenuId, Menu> {
    fn save(&self, menu: Menu) -> Result<Menu, StoreError> {
        self.upsert(*menu.id(), menu.clone())?;
        Ok(menu)
    }

    fn find_by_id(&self, id: &MenuId) -> Result<Option<Menu>, StoreError> {
        self.get(id)
    }

    fn find_all(&self) -> Result<Vec<Menu>, StoreError> {
        self.list()
    }
}
