//! 内存版商品集合服务
//! 提供店面所需的 REST 接口，数据只保存在内存中

use tokio::net::TcpListener;
use tracing::info;

use storefront::app::collection::{self, CollectionStore};
use storefront::infrastructure::{config::load_config, logger::Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let _guard = Logger::init(&config.logging)?;

    info!("启动商品集合服务...");

    let store = CollectionStore::new();
    if config.collection.seed_sample_data {
        store.seed_sample_data().await?;
        info!("✅ 已初始化 {} 个示例商品", store.len().await);
    }

    let path = config.collection.path.clone();
    let app = collection::router(store, &path);

    let addr = config.collection.addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 商品集合服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    {}       - 获取所有商品", path);
    info!("   POST   {}       - 创建商品", path);
    info!("   GET    {}/:id   - 获取商品", path);
    info!("   PUT    {}/:id   - 更新商品", path);
    info!("   DELETE {}/:id   - 删除商品", path);
    info!("   GET    /health  - 健康检查");

    axum::serve(listener, app).await?;
    Ok(())
}
