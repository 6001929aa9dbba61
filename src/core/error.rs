//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 与远端商品集合同步时的错误
///
/// 4xx、5xx 与连接错误统一视为网络/传输失败，调用方不做区分。
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("传输错误: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method} {url} 返回状态码 {status}")]
    Status {
        status: u16,
        method: String,
        url: String,
    },
}

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("请求错误: {0}")]
    BadRequest(String),
    #[error("资源不存在: {0}")]
    NotFound(String),
    #[error("资源冲突: {0}")]
    Conflict(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = CoreError::NotFound("商品 x 不存在".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        let response = CoreError::Conflict("重复".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_status_error_message() {
        let err = SyncError::Status {
            status: 500,
            method: "PUT".to_string(),
            url: "http://localhost/products/a".to_string(),
        };
        assert_eq!(err.to_string(), "PUT http://localhost/products/a 返回状态码 500");
    }
}
