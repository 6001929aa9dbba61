//! 店面处理器：把浏览器表单转换为面板操作

use axum::{
    extract::{Path, State},
    response::{Html, Json, Redirect},
    Form,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::view;
use crate::catalog::model::{DraftMode, FieldEdit, Record};
use crate::catalog::panel::CatalogPanel;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

/// 面板是唯一的状态持有者；锁会跨越网络请求持有，响应按顺序逐个生效
#[derive(Clone)]
pub struct AppState {
    pub panel: Arc<Mutex<CatalogPanel>>,
}

impl AppState {
    pub fn new(panel: CatalogPanel) -> Self {
        Self {
            panel: Arc::new(Mutex::new(panel)),
        }
    }
}

/// 草稿表单；未勾选的复选框不会出现在表单数据中
#[derive(Debug, Deserialize)]
pub struct DraftForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "inStock")]
    pub in_stock: Option<String>,
}

impl DraftForm {
    fn edits(&self) -> Vec<FieldEdit> {
        let in_stock = self.in_stock.as_deref().unwrap_or("");
        [
            ("name", self.name.as_str()),
            ("price", self.price.as_str()),
            ("desc", self.desc.as_str()),
            ("image", self.image.as_str()),
            ("inStock", in_stock),
        ]
        .into_iter()
        .filter_map(|(name, value)| FieldEdit::from_input(name, value))
        .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct FieldForm {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub confirm: String,
}

#[derive(Serialize)]
pub struct PanelSnapshot {
    pub mode: DraftMode,
    pub draft: Record,
    pub records: Vec<Record>,
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let panel = state.panel.lock().await;
    Html(view::render_home(&panel))
}

/// 应用表单中的所有字段后提交（新建或更新由草稿模式决定）
pub async fn submit_draft(
    State(state): State<AppState>,
    Form(form): Form<DraftForm>,
) -> Redirect {
    let mut panel = state.panel.lock().await;
    for edit in form.edits() {
        panel.edit_field(edit);
    }
    let outcome = panel.submit().await;
    info!("草稿提交结果: {:?}", outcome);
    Redirect::to("/")
}

/// 单个字段修改，不触发网络请求
pub async fn edit_field(
    State(state): State<AppState>,
    Form(form): Form<FieldForm>,
) -> Result<Redirect, CoreError> {
    let edit = FieldEdit::from_input(&form.field, &form.value).ok_or_else(|| {
        warn!("未知的草稿字段: {}", form.field);
        CoreError::BadRequest(format!("未知的字段: {}", form.field))
    })?;

    state.panel.lock().await.edit_field(edit);
    Ok(Redirect::to("/"))
}

pub async fn begin_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, CoreError> {
    let mut panel = state.panel.lock().await;
    let record = panel
        .find(&id)
        .cloned()
        .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))?;

    panel.begin_edit(&record);
    Ok(Redirect::to("/"))
}

pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, CoreError> {
    let panel = state.panel.lock().await;
    let record = panel
        .find(&id)
        .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))?;

    Ok(Html(view::render_delete_confirmation(record)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ConfirmForm>,
) -> Redirect {
    let confirmed = form.confirm == "yes";
    let outcome = state.panel.lock().await.delete(&id, &confirmed).await;
    info!("删除商品 {} 结果: {:?}", id, outcome);
    Redirect::to("/")
}

pub async fn snapshot(State(state): State<AppState>) -> Json<ApiResponse<PanelSnapshot>> {
    let panel = state.panel.lock().await;
    Json(ApiResponse::success(PanelSnapshot {
        mode: panel.mode().clone(),
        draft: panel.draft().clone(),
        records: panel.records().to_vec(),
    }))
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let panel = state.panel.lock().await;
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "products_count": panel.records().len(),
        "editing": panel.is_editing()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Price;

    #[test]
    fn test_draft_form_edits() {
        let form = DraftForm {
            name: "Bread".to_string(),
            price: "3".to_string(),
            desc: String::new(),
            image: String::new(),
            in_stock: None,
        };
        assert_eq!(
            form.edits(),
            vec![
                FieldEdit::Name("Bread".to_string()),
                FieldEdit::Price(Price::Raw("3".to_string())),
                FieldEdit::Description(String::new()),
                FieldEdit::Image(String::new()),
                FieldEdit::InStock(false),
            ]
        );
    }

    #[test]
    fn test_checked_box() {
        let form = DraftForm {
            name: String::new(),
            price: String::new(),
            desc: String::new(),
            image: String::new(),
            in_stock: Some("on".to_string()),
        };
        assert!(form.edits().contains(&FieldEdit::InStock(true)));
    }
}
