//! 渲染入口
//!
//! 宿主通过 [`ENTRY_NAME`] 找到 [`render`]，传入属性包，取回标记字符串。

use crate::component::{App, Component};
use crate::config::SsrConfig;
use crate::error::Result;
use crate::page::PageShell;
use crate::props::PropertyBag;
use crate::registry::{self, Registry};
use crate::serializer;

/// 入口的固定全局名称
pub const ENTRY_NAME: &str = "render";

/// 渲染首页组件为标记字符串
pub fn render(props: &PropertyBag) -> Result<String> {
    let tree = App.render(props);
    let html = serializer::render_to_string(&tree)?;
    log::trace!("rendered {} props into {} bytes", props.len(), html.len());
    Ok(html)
}

/// props 以 JSON 文本传入
pub fn render_json(props_json: &str) -> Result<String> {
    let props = PropertyBag::from_json(props_json)?;
    render(&props)
}

/// 渲染并套上完整页面
pub fn render_page(props: &PropertyBag, config: &SsrConfig) -> Result<String> {
    let app_html = render(props)?;
    Ok(PageShell::new(config).render(&app_html, props))
}

/// 发布入口，可重复调用
pub fn init() -> &'static Registry {
    registry::publish()
}
