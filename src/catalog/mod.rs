//! 商品目录：数据模型、远端集合客户端与同步面板

pub mod client;
pub mod model;
pub mod panel;

pub use client::{CatalogApi, HttpCatalogClient};
pub use model::{DraftMode, FieldEdit, Price, Record};
pub use panel::{CatalogPanel, Confirm, DeleteOutcome, SubmitOutcome};
