//! 商品目录数据模型

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// 商品价格
///
/// 数字输入控件得到 `Amount`，文本输入得到 `Raw`，原样保存、不做校验。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Raw(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Amount(0.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{}", amount),
            Price::Raw(raw) => f.write_str(raw),
        }
    }
}

/// 数字之外的任何 JSON 值都按文本保存，null 视为空串
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let price = match Value::deserialize(deserializer)? {
            Value::Number(n) => match n.as_f64() {
                Some(amount) => Price::Amount(amount),
                None => Price::Raw(n.to_string()),
            },
            Value::String(raw) => Price::Raw(raw),
            Value::Null => Price::Raw(String::new()),
            other => Price::Raw(other.to_string()),
        };
        Ok(price)
    }
}

/// 服务器返回什么就保存什么：字段类型不符时按字段降级，而不是让整条记录解码失败
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let text = match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        Ok(text)
    }

    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let flag = match Value::deserialize(deserializer)? {
            Value::Bool(flag) => flag,
            Value::String(text) => matches!(text.as_str(), "true" | "on" | "1"),
            Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
            _ => false,
        };
        Ok(flag)
    }
}

/// 商品记录（与远端集合的 JSON 结构一致）
///
/// 未知字段保存在 `extra` 中，更新时原样发回服务器。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    pub price: Price,
    #[serde(rename = "desc", deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub in_stock: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            price: Price::default(),
            description: String::new(),
            in_stock: false,
            image: String::new(),
            extra: Map::new(),
        }
    }
}

impl Record {
    /// 空白草稿模板，附带新生成的 id
    pub fn draft() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..Self::default()
        }
    }

    /// 应用单个字段修改，其余字段保持不变
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(name) => self.name = name,
            FieldEdit::Price(price) => self.price = price,
            FieldEdit::Description(description) => self.description = description,
            FieldEdit::Image(image) => self.image = image,
            FieldEdit::InStock(in_stock) => self.in_stock = in_stock,
        }
    }
}

/// 对草稿单个字段的修改。`id` 不可编辑。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Price(Price),
    Description(String),
    Image(String),
    InStock(bool),
}

impl FieldEdit {
    /// 把表单输入（name/value）映射为字段修改，未知字段返回 `None`
    ///
    /// 复选框 `inStock` 的取值 `on`/`true`/`1` 视为勾选。
    pub fn from_input(name: &str, value: &str) -> Option<Self> {
        let edit = match name {
            "name" => FieldEdit::Name(value.to_string()),
            "price" => FieldEdit::Price(Price::Raw(value.to_string())),
            "desc" => FieldEdit::Description(value.to_string()),
            "image" => FieldEdit::Image(value.to_string()),
            "inStock" => FieldEdit::InStock(matches!(value, "on" | "true" | "1")),
            _ => return None,
        };
        Some(edit)
    }
}

/// 草稿模式：新建或编辑某条已存在的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DraftMode {
    Creating,
    Editing { original_id: String },
}

impl DraftMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, DraftMode::Editing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_has_fresh_id() {
        let a = Record::draft();
        let b = Record::draft();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "");
        assert_eq!(a.price, Price::Amount(0.0));
        assert!(!a.in_stock);
    }

    #[test]
    fn test_wire_field_names() {
        let record = Record {
            id: "a".to_string(),
            name: "Apple".to_string(),
            price: Price::Amount(1.0),
            description: "red".to_string(),
            in_stock: true,
            image: "apple.png".to_string(),
            ..Record::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["desc"], "red");
        assert_eq!(json["inStock"], true);
        assert_eq!(json["price"], 1.0);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_lenient_deserialize() {
        let record: Record = serde_json::from_str(r#"{"id":"a","name":"Apple","price":"2"}"#).unwrap();
        assert_eq!(record.price, Price::Raw("2".to_string()));
        assert_eq!(record.description, "");
        assert!(!record.in_stock);
    }

    #[test]
    fn test_irregular_fields_degrade_per_field() {
        let json = r#"{"id":2,"name":"Pie","price":null,"desc":null,"inStock":"true","image":7,"rating":4.5}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "2");
        assert_eq!(record.name, "Pie");
        assert_eq!(record.price, Price::Raw(String::new()));
        assert_eq!(record.description, "");
        assert!(record.in_stock);
        assert_eq!(record.image, "7");
        assert_eq!(record.extra.get("rating"), Some(&serde_json::json!(4.5)));
    }

    #[test]
    fn test_unknown_fields_are_sent_back() {
        let record: Record =
            serde_json::from_str(r#"{"id":"a","name":"Apple","category":"fruit"}"#).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "fruit");
        assert_eq!(json["id"], "a");
    }

    #[test]
    fn test_apply_touches_only_named_field() {
        let mut record = Record::draft();
        let before = record.clone();
        record.apply(FieldEdit::Name("Bread".to_string()));
        assert_eq!(record.name, "Bread");
        assert_eq!(record.id, before.id);
        assert_eq!(record.price, before.price);
        assert_eq!(record.description, before.description);
        assert_eq!(record.in_stock, before.in_stock);
        assert_eq!(record.image, before.image);
    }

    #[test]
    fn test_from_input() {
        assert_eq!(
            FieldEdit::from_input("price", "3"),
            Some(FieldEdit::Price(Price::Raw("3".to_string())))
        );
        assert_eq!(FieldEdit::from_input("inStock", "on"), Some(FieldEdit::InStock(true)));
        assert_eq!(FieldEdit::from_input("inStock", ""), Some(FieldEdit::InStock(false)));
        assert_eq!(FieldEdit::from_input("id", "x"), None);
    }
}
