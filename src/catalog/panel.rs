//! 商品面板：草稿、草稿模式与本地列表，并与远端集合保持同步
//!
//! 所有失败都只记录日志，不重试，也不改变面板状态（挂载失败时列表保持为空）。

use std::sync::Arc;
use tracing::{error, info};

use super::client::CatalogApi;
use super::model::{DraftMode, FieldEdit, Record};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// 删除前的交互式确认
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// 已经拿到用户答复时直接使用布尔值
impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Record),
    Updated(Record),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    Failed,
}

pub struct CatalogPanel {
    api: Arc<dyn CatalogApi>,
    draft: Record,
    mode: DraftMode,
    records: Vec<Record>,
}

impl CatalogPanel {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            draft: Record::draft(),
            mode: DraftMode::Creating,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn draft(&self) -> &Record {
        &self.draft
    }

    pub fn mode(&self) -> &DraftMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Create"
        }
    }

    /// 拉取整个集合，成功时原样替换本地列表
    pub async fn mount(&mut self) {
        match self.api.list().await {
            Ok(records) => {
                info!("已加载 {} 个商品", records.len());
                self.records = records;
            }
            Err(e) => error!("加载商品列表失败: {}", e),
        }
    }

    pub fn edit_field(&mut self, edit: FieldEdit) {
        self.draft.apply(edit);
    }

    /// 把已有记录复制到草稿并进入编辑模式（不会先向服务器拉取最新数据）
    pub fn begin_edit(&mut self, record: &Record) {
        self.draft = record.clone();
        self.mode = DraftMode::Editing {
            original_id: record.id.clone(),
        };
    }

    /// 按草稿模式发起新建或更新请求
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.mode.clone() {
            DraftMode::Creating => match self.api.create(&self.draft).await {
                Ok(created) => {
                    info!("商品 {} 创建成功", created.id);
                    self.records.push(created.clone());
                    self.draft = Record::draft();
                    SubmitOutcome::Created(created)
                }
                Err(e) => {
                    // 草稿保留，再次提交会复用同一个 id
                    error!("创建商品 {} 失败: {}", self.draft.id, e);
                    SubmitOutcome::Failed
                }
            },
            DraftMode::Editing { original_id } => {
                match self.api.update(&original_id, &self.draft).await {
                    Ok(updated) => {
                        info!("商品 {} 更新成功", original_id);
                        for record in self.records.iter_mut() {
                            if record.id == original_id {
                                *record = updated.clone();
                            }
                        }
                        self.mode = DraftMode::Creating;
                        self.draft = Record::draft();
                        SubmitOutcome::Updated(updated)
                    }
                    Err(e) => {
                        error!("更新商品 {} 失败: {}", original_id, e);
                        SubmitOutcome::Failed
                    }
                }
            }
        }
    }

    /// 经确认后删除，未确认时不发请求、不改状态
    pub async fn delete(&mut self, id: &str, confirm: &impl Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Declined;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                info!("商品 {} 已删除", id);
                self.records.retain(|record| record.id != id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("删除商品 {} 失败: {}", id, e);
                DeleteOutcome::Failed
            }
        }
    }
}
