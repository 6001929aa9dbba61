//! 集合服务的处理器（列表、新建、查询、替换、删除）

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use super::store::CollectionStore;
use crate::catalog::model::Record;
use crate::core::error::CoreError;

pub async fn list_records(State(store): State<CollectionStore>) -> Json<Vec<Record>> {
    Json(store.list().await)
}

pub async fn create_record(
    State(store): State<CollectionStore>,
    Json(payload): Json<Record>,
) -> Result<(StatusCode, Json<Record>), CoreError> {
    let record = store.insert(payload).await?;
    info!("已创建商品 {}", record.id);
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_record(
    State(store): State<CollectionStore>,
    Path(id): Path<String>,
) -> Result<Json<Record>, CoreError> {
    Ok(Json(store.get(&id).await?))
}

pub async fn replace_record(
    State(store): State<CollectionStore>,
    Path(id): Path<String>,
    Json(payload): Json<Record>,
) -> Result<Json<Record>, CoreError> {
    let record = store.replace(&id, payload).await?;
    info!("已更新商品 {}", id);
    Ok(Json(record))
}

pub async fn delete_record(
    State(store): State<CollectionStore>,
    Path(id): Path<String>,
) -> Result<Json<Record>, CoreError> {
    let record = store.remove(&id).await?;
    info!("已删除商品 {}", id);
    Ok(Json(record))
}

/// 健康检查
pub async fn health_check(State(store): State<CollectionStore>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": {
            "type": "in-memory",
            "records_count": store.len().await
        }
    }))
}
