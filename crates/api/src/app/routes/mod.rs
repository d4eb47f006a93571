use axum::Router;

pub mod menu_groups;
pub mod menus;
pub mod products;
pub mod system;

/// Router for all catalog endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/menu-groups", menu_groups::router())
        .nest("/menus", menus::router())
}
