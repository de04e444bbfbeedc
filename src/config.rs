//! SSR 配置

use crate::error::{RenderError, Result};
use serde::Deserialize;
use std::path::Path;

/// ssr.json 配置结构
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SsrConfig {
    #[serde(default = "default_entry_name")]
    pub entry_name: String,
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_mount_id")]
    pub mount_id: String,
}

fn default_entry_name() -> String { crate::entry::ENTRY_NAME.to_string() }
fn default_page_title() -> String { "PAGE".to_string() }
fn default_lang() -> String { "en".to_string() }
fn default_mount_id() -> String { "app".to_string() }

impl Default for SsrConfig {
    fn default() -> Self {
        Self {
            entry_name: default_entry_name(),
            page_title: default_page_title(),
            lang: default_lang(),
            mount_id: default_mount_id(),
        }
    }
}

impl SsrConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// 读取配置文件，文件不存在时使用默认配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("{} not found, using default config", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = SsrConfig::from_json(r#"{"pageTitle": "Home"}"#).unwrap();
        assert_eq!(config.page_title, "Home");
        assert_eq!(config.entry_name, "render");
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.lang, "en");
    }

    #[test]
    fn test_empty_object_equals_default() {
        assert_eq!(SsrConfig::from_json("{}").unwrap(), SsrConfig::default());
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(SsrConfig::from_json("[1"), Err(RenderError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = SsrConfig::load("/nonexistent/ssr.json").unwrap();
        assert_eq!(config, SsrConfig::default());
    }
}
