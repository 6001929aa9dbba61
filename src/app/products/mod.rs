//! 店面页面：导航栏与商品面板

pub mod handler;
pub mod view;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;
pub use handler::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::home))
        .route("/products", get(handler::home))
        .route("/products/draft", post(handler::submit_draft))
        .route("/products/draft/field", post(handler::edit_field))
        .route("/products/:id/edit", post(handler::begin_edit))
        .route(
            "/products/:id/delete",
            get(handler::confirm_delete).post(handler::delete),
        )
        .route("/api/panel", get(handler::snapshot))
        .route("/health", get(handler::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}
