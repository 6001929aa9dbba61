//! 远端商品集合的 HTTP 客户端

use async_trait::async_trait;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

use super::model::Record;
use crate::core::error::SyncError;

/// 远端集合的四个操作
///
/// 面板只依赖这个 trait，测试中可以换成脚本化的实现。
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// GET `{base}`
    async fn list(&self) -> Result<Vec<Record>, SyncError>;
    /// POST `{base}`，请求体携带客户端生成的 id
    async fn create(&self, record: &Record) -> Result<Record, SyncError>;
    /// PUT `{base}/{id}`
    async fn update(&self, id: &str, record: &Record) -> Result<Record, SyncError>;
    /// DELETE `{base}/{id}`，响应体被忽略
    async fn delete(&self, id: &str) -> Result<(), SyncError>;
}

/// 基于 reqwest 的集合客户端
#[derive(Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SyncError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// id 作为单个路径段编码，`/`、`?`、`#`、`%` 不会改变请求目标
    fn url_for(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}", self.base_url, urlencoding::encode(id)),
            None => self.base_url.clone(),
        }
    }

    async fn send<B>(
        &self,
        method: Method,
        id: Option<&str>,
        body: Option<&B>,
    ) -> Result<reqwest::Response, SyncError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url_for(id);
        debug!("{} {}", method, url);

        let mut builder = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                status: status.as_u16(),
                method: method.to_string(),
                url,
            });
        }

        Ok(response)
    }

    /// 通用的类型化请求：按 method/路径/请求体发送，并把响应体解码为 `T`
    pub async fn request<B, T>(
        &self,
        method: Method,
        id: Option<&str>,
        body: Option<&B>,
    ) -> Result<T, SyncError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(method, id, body).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    #[instrument(skip(self), fields(base = %self.base_url))]
    async fn list(&self) -> Result<Vec<Record>, SyncError> {
        self.request::<(), _>(Method::GET, None, None).await
    }

    #[instrument(skip(self, record), fields(id = %record.id))]
    async fn create(&self, record: &Record) -> Result<Record, SyncError> {
        self.request(Method::POST, None, Some(record)).await
    }

    #[instrument(skip(self, record))]
    async fn update(&self, id: &str, record: &Record) -> Result<Record, SyncError> {
        self.request(Method::PUT, Some(id), Some(record)).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), SyncError> {
        self.send::<()>(Method::DELETE, Some(id), None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url() {
        let client =
            HttpCatalogClient::new("http://localhost:3001/products/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001/products");
        assert_eq!(client.url_for(None), "http://localhost:3001/products");
        assert_eq!(client.url_for(Some("a")), "http://localhost:3001/products/a");
        assert_eq!(
            client.url_for(Some("a?b/c#d%")),
            "http://localhost:3001/products/a%3Fb%2Fc%23d%25"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // 端口 9 (discard) 通常无人监听
        let client = HttpCatalogClient::new("http://127.0.0.1:9/products", Duration::from_secs(2)).unwrap();
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, SyncError::Transport(_)));
    }
}
