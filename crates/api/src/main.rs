use std::sync::Arc;

use anyhow::Context;

use kitchenpos_api::app::{build_app, services::build_services};
use kitchenpos_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    kitchenpos_observability::init(&config.log);

    let app = build_app(Arc::new(build_services()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
