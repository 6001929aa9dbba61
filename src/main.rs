//! 店面服务器：挂载商品面板后提供页面

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use storefront::app::products::{self, AppState};
use storefront::catalog::{CatalogPanel, HttpCatalogClient};
use storefront::infrastructure::{config::load_config, logger::Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let _guard = Logger::init(&config.logging)?;

    info!("启动 DarkFoods 店面...");

    let client = HttpCatalogClient::new(
        config.catalog.base_url.clone(),
        Duration::from_secs(config.catalog.timeout_seconds),
    )?;
    info!("商品集合地址: {}", client.base_url());

    let mut panel = CatalogPanel::new(Arc::new(client));
    panel.mount().await;

    let app = products::router(AppState::new(panel));

    let addr = config.storefront.addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 店面运行在 http://{}", addr);
    info!("   GET  /                       - 首页");
    info!("   POST /products/draft         - 提交草稿");
    info!("   POST /products/:id/edit      - 编辑商品");
    info!("   GET  /products/:id/delete    - 删除确认");

    axum::serve(listener, app).await?;
    Ok(())
}
