//! 属性包 - 宿主每次调用传入的数据

use crate::error::{RenderError, Result};
use serde_json::{Map, Value as JsonValue};

/// 属性包，单次渲染内只读
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    values: Map<String, JsonValue>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文本解析
    pub fn from_json(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)
            .map_err(|e| RenderError::InvalidProps(e.to_string()))?;
        Self::from_value(value)
    }

    /// null 视为空对象，其余非对象值拒绝
    pub fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(values) => Ok(Self { values }),
            JsonValue::Null => Ok(Self::new()),
            other => Err(RenderError::InvalidProps(type_name(&other).to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key)
    }

    /// 取值并转成文本，布尔与 null 视为无文本
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(json_to_string)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json(&self) -> String {
        // Map 序列化不会失败
        serde_json::to_string(&self.values).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for PropertyBag {
    fn from_iter<T: IntoIterator<Item = (K, JsonValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn json_to_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(
            n.as_f64()
                .map(js_number_to_string)
                .unwrap_or_else(|| n.to_string()),
        ),
        JsonValue::Bool(_) | JsonValue::Null => None,
        _ => Some(value.to_string()),
    }
}

/// 按 JS `Number.prototype.toString` 的规则格式化
fn js_number_to_string(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        // JS 的正指数带 '+'
        let s = format!("{:e}", n);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", n)
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
