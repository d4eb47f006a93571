use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use kitchenpos_core::MenuGroupId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(create_menu_group).get(list_menu_groups))
}

pub async fn create_menu_group(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateMenuGroupRequest>,
) -> axum::response::Response {
    match services.menu_groups.create(body.into_command(MenuGroupId::new())) {
        Ok(group) => (StatusCode::CREATED, Json(group)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_menu_groups(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.menu_groups.list() {
        Ok(groups) => (StatusCode::OK, Json(groups)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
