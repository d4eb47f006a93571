//! Menu creation workflow.
//!
//! ```text
//! CreateMenu
//!   ↓
//! 1. Build the Menu + line items (negative price/quantity -> InvalidValue)
//!   ↓
//! 2. Menu group must exist (-> EntityNotFound(menu_group))
//!   ↓
//! 3. Resolve each product's current price, multiply by quantity, sum from ZERO
//!    (missing product -> EntityNotFound(product), total past the decimal
//!    range -> InvalidValue)
//!   ↓
//! 4. Menu price must not exceed that total (-> InvalidArgument)
//!   ↓
//! 5. Persist menu + line items as one unit
//! ```
//!
//! Every step is a hard gate: the first failure returns and nothing is written.
//! Product prices are read once, at step 3; a price change between that read and
//! the save is not re-checked.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use kitchenpos_core::{
    DomainError, Entity, MenuGroupId, MenuId, Money, ProductId, Quantity,
};
use kitchenpos_menu_groups::MenuGroup;
use kitchenpos_menus::{CreateMenu, Menu, MenuProduct, MenuProducts};
use kitchenpos_products::Product;

use super::ServiceError;
use crate::store::{MenuGroupRepository, MenuRepository, ProductRepository};

pub const PRICE_ABOVE_PRODUCTS_TOTAL: &str = "menu price exceeds total of its products";

/// Read representation of a menu line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuProductResponse {
    pub seq: u32,
    pub menu_id: MenuId,
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Read representation of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuResponse {
    pub id: MenuId,
    pub name: String,
    pub price: Money,
    pub menu_group_id: MenuGroupId,
    pub menu_products: Vec<MenuProductResponse>,
}

impl From<&MenuProduct> for MenuProductResponse {
    fn from(line: &MenuProduct) -> Self {
        Self {
            seq: line.seq(),
            menu_id: line.menu_id(),
            product_id: line.product_id(),
            quantity: line.quantity(),
        }
    }
}

impl From<&Menu> for MenuResponse {
    fn from(menu: &Menu) -> Self {
        Self {
            id: menu.id_typed(),
            name: menu.name().to_string(),
            price: menu.price(),
            menu_group_id: menu.menu_group_id(),
            menu_products: menu
                .menu_products()
                .iter()
                .map(MenuProductResponse::from)
                .collect(),
        }
    }
}

/// Creates and lists menus against injected catalog lookups.
#[derive(Debug)]
pub struct MenuService<G, P, M> {
    menu_groups: G,
    products: P,
    menus: M,
}

impl<G, P, M> MenuService<G, P, M>
where
    G: MenuGroupRepository,
    P: ProductRepository,
    M: MenuRepository,
{
    pub fn new(menu_groups: G, products: P, menus: M) -> Self {
        Self {
            menu_groups,
            products,
            menus,
        }
    }

    pub fn create(&self, request: CreateMenu) -> Result<MenuResponse, ServiceError> {
        debug!(
            menu_id = %request.menu_id,
            menu_group_id = %request.menu_group_id,
            lines = request.menu_products.len(),
            "creating menu"
        );

        let menu = Menu::create(request)?;
        self.validate_menu_group(&menu)?;
        self.validate_price(&menu)?;

        let saved = self.menus.save(menu)?;
        info!(menu_id = %saved.id_typed(), price = %saved.price(), "menu created");
        Ok(MenuResponse::from(&saved))
    }

    pub fn list(&self) -> Result<Vec<MenuResponse>, ServiceError> {
        Ok(self.menus.find_all()?.iter().map(MenuResponse::from).collect())
    }

    pub fn get(&self, id: &MenuId) -> Result<MenuResponse, ServiceError> {
        let menu = self.menus.find_by_id(id)?.ok_or_else(|| Menu::not_found(id))?;
        Ok(MenuResponse::from(&menu))
    }

    fn validate_menu_group(&self, menu: &Menu) -> Result<(), ServiceError> {
        let menu_group_id = menu.menu_group_id();
        if !self.menu_groups.exists_by_id(&menu_group_id)? {
            return Err(MenuGroup::not_found(&menu_group_id).into());
        }
        Ok(())
    }

    fn validate_price(&self, menu: &Menu) -> Result<(), ServiceError> {
        let total = self.total_price(menu.menu_products())?;
        if menu.is_more_expensive_than(total) {
            return Err(DomainError::invalid_argument(PRICE_ABOVE_PRODUCTS_TOTAL).into());
        }
        Ok(())
    }

    fn total_price(&self, menu_products: &MenuProducts) -> Result<Money, ServiceError> {
        menu_products
            .iter()
            .try_fold(Money::ZERO, |total, line| -> Result<Money, ServiceError> {
                Ok(total.add(self.line_price(line)?)?)
            })
    }

    fn line_price(&self, line: &MenuProduct) -> Result<Money, ServiceError> {
        let product_id = line.product_id();
        let product = self
            .products
            .find_by_id(&product_id)?
            .ok_or_else(|| Product::not_found(&product_id))?;
        Ok(line.total_price(product.price())?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use kitchenpos_core::EntityKind;
    use kitchenpos_menu_groups::CreateMenuGroup;
    use kitchenpos_menus::MenuProductLine;
    use kitchenpos_products::CreateProduct;

    use super::*;
    use crate::store::{InMemoryStore, StoreError};

    type Groups = Arc<InMemoryStore<MenuGroupId, MenuGroup>>;
    type Products = Arc<CountingProducts>;
    type Menus = Arc<InMemoryStore<MenuId, Menu>>;

    /// Product lookup that counts `find_by_id` calls.
    #[derive(Default)]
    struct CountingProducts {
        inner: InMemoryStore<ProductId, Product>,
        lookups: AtomicUsize,
    }

    impl ProductRepository for CountingProducts {
        fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_id(id)
        }

        fn save(&self, product: Product) -> Result<Product, StoreError> {
            self.inner.save(product)
        }

        fn find_all(&self) -> Result<Vec<Product>, StoreError> {
            self.inner.find_all()
        }
    }

    /// Menu store whose backend is down.
    struct UnavailableMenus;

    impl MenuRepository for UnavailableMenus {
        fn save(&self, _menu: Menu) -> Result<Menu, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        fn find_by_id(&self, _id: &MenuId) -> Result<Option<Menu>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        fn find_all(&self) -> Result<Vec<Menu>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    struct Fixture {
        groups: Groups,
        products: Products,
        menus: Menus,
        service: MenuService<Groups, Products, Menus>,
    }

    impl Fixture {
        fn new() -> Self {
            let groups: Groups = Arc::new(InMemoryStore::new());
            let products: Products = Arc::new(CountingProducts::default());
            let menus: Menus = Arc::new(InMemoryStore::new());
            let service = MenuService::new(groups.clone(), products.clone(), menus.clone());
            Self {
                groups,
                products,
                menus,
                service,
            }
        }

        fn menu_group(&self) -> MenuGroupId {
            let group = MenuGroup::create(CreateMenuGroup {
                menu_group_id: MenuGroupId::new(),
                name: "two-chicken sets".to_string(),
            })
            .unwrap();
            self.groups.save(group).unwrap().id_typed()
        }

        fn product(&self, price: Decimal) -> ProductId {
            let product = Product::create(CreateProduct {
                product_id: ProductId::new(),
                name: "fried chicken".to_string(),
                price,
            })
            .unwrap();
            self.products.save(product).unwrap().id_typed()
        }

        fn lookups(&self) -> usize {
            self.products.lookups.load(Ordering::SeqCst)
        }
    }

    fn create_menu(price: Decimal, menu_group_id: MenuGroupId, lines: &[(ProductId, i64)]) -> CreateMenu {
        CreateMenu {
            menu_id: MenuId::new(),
            name: "two fried chickens".to_string(),
            price,
            menu_group_id,
            menu_products: lines
                .iter()
                .map(|&(product_id, quantity)| MenuProductLine { product_id, quantity })
                .collect(),
        }
    }

    #[test]
    fn create_menu_priced_below_products_total() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let chicken = fx.product(dec!(6000));

        let created = fx
            .service
            .create(create_menu(dec!(10000), group, &[(chicken, 2)]))
            .unwrap();

        assert_eq!(created.price, Money::of(dec!(10000)).unwrap());
        assert_eq!(created.menu_group_id, group);
        assert_eq!(created.menu_products.len(), 1);
        assert_eq!(created.menu_products[0].menu_id, created.id);
        assert_eq!(created.menu_products[0].quantity.value(), 2);
        assert_eq!(fx.menus.find_all().unwrap().len(), 1);
    }

    #[test]
    fn create_menu_priced_exactly_at_total() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let chicken = fx.product(dec!(6000));

        assert!(fx.service.create(create_menu(dec!(12000), group, &[(chicken, 2)])).is_ok());
    }

    #[test]
    fn create_menu_priced_above_total_is_invalid_argument() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let chicken = fx.product(dec!(6000));

        let err = fx
            .service
            .create(create_menu(dec!(13000), group, &[(chicken, 2)]))
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Domain(DomainError::invalid_argument(PRICE_ABOVE_PRODUCTS_TOTAL))
        );
        assert!(fx.menus.find_all().unwrap().is_empty());
    }

    #[test]
    fn totals_across_several_lines() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let chicken = fx.product(dec!(6000));
        let cola = fx.product(dec!(1500.50));

        // 6000 * 2 + 1500.50 * 3 = 16501.50
        let lines = [(chicken, 2), (cola, 3)];
        assert!(fx.service.create(create_menu(dec!(16501.50), group, &lines)).is_ok());

        let err = fx
            .service
            .create(create_menu(dec!(16501.51), group, &lines))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn line_total_past_decimal_range_is_rejected_not_persisted() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let priciest = fx.product(Decimal::MAX);

        let err = fx
            .service
            .create(create_menu(dec!(1), group, &[(priciest, 2)]))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidValue(_))));
        assert!(fx.menus.find_all().unwrap().is_empty());
    }

    #[test]
    fn products_total_past_decimal_range_is_rejected() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let priciest = fx.product(Decimal::MAX);
        let chicken = fx.product(dec!(6000));

        let err = fx
            .service
            .create(create_menu(dec!(1), group, &[(priciest, 1), (chicken, 1)]))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidValue(_))));
    }

    #[test]
    fn missing_menu_group_short_circuits_product_lookups() {
        let fx = Fixture::new();
        let chicken = fx.product(dec!(6000));
        let missing = MenuGroupId::new();

        let err = fx
            .service
            .create(create_menu(dec!(10000), missing, &[(chicken, 2)]))
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Domain(DomainError::not_found(EntityKind::MenuGroup, missing))
        );
        assert_eq!(fx.lookups(), 0);
        assert!(fx.menus.find_all().unwrap().is_empty());
    }

    #[test]
    fn missing_product_is_entity_not_found() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let missing = ProductId::new();

        let err = fx
            .service
            .create(create_menu(dec!(0), group, &[(missing, 1)]))
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Domain(DomainError::not_found(EntityKind::Product, missing))
        );
        assert!(fx.menus.find_all().unwrap().is_empty());
    }

    #[test]
    fn negative_values_fail_before_any_lookup() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let chicken = fx.product(dec!(6000));

        let err = fx
            .service
            .create(create_menu(dec!(-1), group, &[(chicken, 1)]))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidValue(_))));

        let err = fx
            .service
            .create(create_menu(dec!(1000), group, &[(chicken, -1)]))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidValue(_))));

        assert_eq!(fx.lookups(), 0);
    }

    #[test]
    fn empty_line_items_total_zero() {
        let fx = Fixture::new();
        let group = fx.menu_group();

        assert!(fx.service.create(create_menu(dec!(0), group, &[])).is_ok());

        let err = fx
            .service
            .create(create_menu(dec!(0.01), group, &[]))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn list_is_empty_then_follows_persistence_order() {
        let fx = Fixture::new();
        assert!(fx.service.list().unwrap().is_empty());

        let group = fx.menu_group();
        let chicken = fx.product(dec!(6000));
        let created: Vec<MenuResponse> = (0..3)
            .map(|_| {
                fx.service
                    .create(create_menu(dec!(6000), group, &[(chicken, 1)]))
                    .unwrap()
            })
            .collect();

        let listed = fx.service.list().unwrap();
        assert_eq!(listed, created);
        assert_eq!(fx.service.list().unwrap(), listed);
    }

    #[test]
    fn get_returns_created_menu_or_not_found() {
        let fx = Fixture::new();
        let group = fx.menu_group();
        let created = fx.service.create(create_menu(dec!(0), group, &[])).unwrap();

        assert_eq!(fx.service.get(&created.id).unwrap(), created);

        let missing = MenuId::new();
        assert_eq!(
            fx.service.get(&missing).unwrap_err(),
            ServiceError::Domain(DomainError::not_found(EntityKind::Menu, missing))
        );
    }

    #[test]
    fn store_failure_surfaces_as_store_error() {
        let groups: Groups = Arc::new(InMemoryStore::new());
        let products: Products = Arc::new(CountingProducts::default());
        let service = MenuService::new(groups.clone(), products, UnavailableMenus);

        let group = MenuGroup::create(CreateMenuGroup {
            menu_group_id: MenuGroupId::new(),
            name: "sets".to_string(),
        })
        .unwrap();
        let group_id = groups.save(group).unwrap().id_typed();

        let err = service.create(create_menu(dec!(0), group_id, &[])).unwrap_err();
        assert!(matches!(err, ServiceError::Store(StoreError::Unavailable(_))));
        assert!(matches!(service.list().unwrap_err(), ServiceError::Store(_)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 100,
                ..ProptestConfig::default()
            })]

            /// Property: creation succeeds iff price <= sum(product price * quantity).
            #[test]
            fn creation_matches_price_bound(
                lines in proptest::collection::vec((0i64..100_000, 0i64..10), 0..6),
                menu_cents in 0i64..2_000_000
            ) {
                let fx = Fixture::new();
                let group = fx.menu_group();

                let mut expected = Decimal::ZERO;
                let mut menu_lines = Vec::new();
                for (cents, quantity) in &lines {
                    let price = Decimal::new(*cents, 2);
                    expected += price * Decimal::from(*quantity);
                    menu_lines.push((fx.product(price), *quantity));
                }

                let menu_price = Decimal::new(menu_cents, 2);
                let result = fx.service.create(create_menu(menu_price, group, &menu_lines));

                prop_assert_eq!(result.is_ok(), menu_price <= expected);
                prop_assert_eq!(fx.service.list().unwrap().len(), usize::from(result.is_ok()));
            }
        }
    }
}
