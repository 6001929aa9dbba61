//! # DarkFoods 店面
//!
//! 一个最小的商品店面：固定导航栏加上一个商品面板，面板通过 HTTP
//! 对远端商品集合执行增删改查，并让本地列表与服务器保持一致。
//! - `catalog`: 数据模型、集合客户端、同步面板
//! - `app`: 店面页面、导航栏、内存版集合服务
//! - `core`: 错误、响应与中间件
//! - `infrastructure`: 配置与日志

pub mod app;
pub mod catalog;
pub mod core;
pub mod infrastructure;

pub use catalog::{CatalogApi, CatalogPanel, HttpCatalogClient, Record};
pub use crate::core::error::SyncError;
