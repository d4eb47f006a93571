use std::sync::Arc;

use kitchenpos_core::{MenuGroupId, MenuId, ProductId};
use kitchenpos_infra::services::{MenuGroupService, MenuService, ProductService};
use kitchenpos_infra::store::InMemoryStore;
use kitchenpos_menu_groups::MenuGroup;
use kitchenpos_menus::Menu;
use kitchenpos_products::Product;

pub type MenuGroupStore = Arc<InMemoryStore<MenuGroupId, MenuGroup>>;
pub type ProductStore = Arc<InMemoryStore<ProductId, Product>>;
pub type MenuStore = Arc<InMemoryStore<MenuId, Menu>>;

/// Application services shared by all handlers.
///
/// The menu service reads the same group/product stores the catalog services write,
/// so a product created over HTTP is immediately visible to menu validation.
pub struct AppServices {
    pub menu_groups: MenuGroupService<MenuGroupStore>,
    pub products: ProductService<ProductStore>,
    pub menus: MenuService<MenuGroupStore, ProductStore, MenuStore>,
}

/// In-memory wiring (dev/test).
pub fn build_services() -> AppServices {
    let menu_groups: MenuGroupStore = Arc::new(InMemoryStore::new());
    let products: ProductStore = Arc::new(InMemoryStore::new());
    let menus: MenuStore = Arc::new(InMemoryStore::new());

    AppServices {
        menu_groups: MenuGroupService::new(menu_groups.clone()),
        products: ProductService::new(products.clone()),
        menus: MenuService::new(menu_groups, products, menus),
    }
}
