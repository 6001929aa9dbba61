//! 内存版商品集合，按插入顺序保存

use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::model::{Price, Record};
use crate::core::error::CoreError;

#[derive(Clone, Default)]
pub struct CollectionStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn get(&self, id: &str) -> Result<Record, CoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))
    }

    /// 保留客户端提供的 id，为空时生成新的；重复 id 返回冲突
    pub async fn insert(&self, mut record: Record) -> Result<Record, CoreError> {
        if record.id.trim().is_empty() {
            record.id = Uuid::new_v4().to_string();
        }

        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(CoreError::Conflict(format!("商品 {} 已存在", record.id)));
        }

        records.push(record.clone());
        Ok(record)
    }

    /// 整条替换，路径中的 id 优先于请求体中的 id
    pub async fn replace(&self, id: &str, mut record: Record) -> Result<Record, CoreError> {
        record.id = id.to_string();

        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))?;

        *slot = record.clone();
        Ok(record)
    }

    pub async fn remove(&self, id: &str) -> Result<Record, CoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))?;

        Ok(records.remove(index))
    }

    /// 初始化示例数据
    pub async fn seed_sample_data(&self) -> Result<(), CoreError> {
        let samples = [
            ("Sourdough Loaf", 4.5, "Slow-fermented country bread", true),
            ("Dark Roast Coffee", 12.0, "Whole beans, 500g", true),
            ("Black Garlic", 6.25, "Aged for 40 days", false),
        ];

        for (name, price, description, in_stock) in samples {
            self.insert(Record {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                price: Price::Amount(price),
                description: description.to_string(),
                in_stock,
                image: String::new(),
                ..Record::default()
            })
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> Record {
        Record {
            id: id.to_string(),
            name: name.to_string(),
            ..Record::default()
        }
    }

    #[tokio::test]
    async fn test_insert_keeps_client_id_and_order() {
        let store = CollectionStore::new();
        store.insert(record("b", "Bread")).await.unwrap();
        store.insert(record("a", "Apple")).await.unwrap();

        let ids: Vec<String> = store.list().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_insert_generates_missing_id() {
        let store = CollectionStore::new();
        let created = store.insert(record("", "Bread")).await.unwrap();
        assert!(Uuid::parse_str(&created.id).is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_id_conflicts() {
        let store = CollectionStore::new();
        store.insert(record("a", "Apple")).await.unwrap();
        let err = store.insert(record("a", "Again")).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_replace_forces_path_id() {
        let store = CollectionStore::new();
        store.insert(record("a", "Apple")).await.unwrap();

        let updated = store.replace("a", record("zzz", "Green apple")).await.unwrap();
        assert_eq!(updated.id, "a");
        assert_eq!(store.get("a").await.unwrap().name, "Green apple");

        let err = store.replace("missing", record("missing", "x")).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = CollectionStore::new();
        store.insert(record("a", "Apple")).await.unwrap();
        store.insert(record("b", "Bread")).await.unwrap();

        assert_eq!(store.remove("a").await.unwrap().name, "Apple");
        assert!(store.get("a").await.is_err());
        assert!(matches!(store.remove("a").await, Err(CoreError::NotFound(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_seed_sample_data() {
        let store = CollectionStore::new();
        store.seed_sample_data().await.unwrap();
        assert_eq!(store.len().await, 3);
    }
}
