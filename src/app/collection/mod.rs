//! 远端商品集合的内存实现（供店面开发与测试使用）

pub mod handler;
pub mod store;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
pub use store::CollectionStore;

/// 在 `path` 下挂载集合：`{path}` 与 `{path}/:id`
pub fn router(store: CollectionStore, path: &str) -> Router {
    let path = path.trim_end_matches('/');

    Router::new()
        .route(
            path,
            get(handler::list_records).post(handler::create_record),
        )
        .route(
            &format!("{}/:id", path),
            get(handler::get_record)
                .put(handler::replace_record)
                .delete(handler::delete_record),
        )
        .route("/health", get(handler::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
