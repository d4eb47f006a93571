use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use kitchenpos_core::MenuId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_menu).get(list_menus))
        .route("/:id", get(get_menu))
}

pub async fn create_menu(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateMenuRequest>,
) -> axum::response::Response {
    let cmd = match body.into_command(MenuId::new()) {
        Ok(cmd) => cmd,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.menus.create(cmd) {
        Ok(menu) => (StatusCode::CREATED, Json(menu)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_menus(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.menus.list() {
        Ok(menus) => (StatusCode::OK, Json(menus)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_menu(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let menu_id: MenuId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.menus.get(&menu_id) {
        Ok(menu) => (StatusCode::OK, Json(menu)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
