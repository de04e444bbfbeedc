//! 全局入口表
//!
//! 进程内只写一次、之后只读。宿主按名称查找渲染函数。

use crate::error::Result;
use crate::props::PropertyBag;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// 渲染函数签名
pub type RenderFn = fn(&PropertyBag) -> Result<String>;

/// 名称到渲染函数的映射
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<&'static str, RenderFn>,
}

impl Registry {
    fn new() -> Self {
        let mut entries: HashMap<&'static str, RenderFn> = HashMap::new();
        entries.insert(crate::entry::ENTRY_NAME, crate::entry::render);
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<RenderFn> {
        self.entries.get(name).copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// 发布入口表，重复调用返回同一张表
pub fn publish() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        log::debug!("publishing render entry under {:?}", crate::entry::ENTRY_NAME);
        Registry::new()
    })
}

pub fn is_published() -> bool {
    REGISTRY.get().is_some()
}

/// 按名称查找，未发布时返回 None
pub fn lookup(name: &str) -> Option<RenderFn> {
    REGISTRY.get().and_then(|r| r.get(name))
}

pub fn names() -> Vec<&'static str> {
    REGISTRY.get().map(Registry::names).unwrap_or_default()
}
