//! SSR 演示程序
//!
//! 用法: ssr-demo [props.json] [ssr.json]
//! 读取 props（缺省为示例数据），经 QuickJS 全局入口渲染，输出完整页面。

use mini_ssr::js::JsRuntime;
use mini_ssr::page::PageShell;
use mini_ssr::{registry, PropertyBag, RenderError, SsrConfig};
use serde_json::json;

fn main() -> Result<(), RenderError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let props = match args.next() {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| RenderError::InvalidProps(format!("{}: {}", path, e)))?;
            PropertyBag::from_json(&content)?
        }
        None => PropertyBag::from_value(json!({
            "message": "Hello, World! from Rust.",
        }))?,
    };
    let config = SsrConfig::load(args.next().unwrap_or_else(|| "ssr.json".to_string()))?;

    // 入口表只发布一次
    let table = mini_ssr::entry::init();
    log::info!("published entries: {:?}", table.names());
    if registry::lookup(&config.entry_name).is_none() {
        return Err(RenderError::Config(format!(
            "no entry named {:?}",
            config.entry_name
        )));
    }

    let rt = JsRuntime::new()?;
    rt.install_entry()?;
    let app_html = rt.render(&props)?;
    log::info!("rendered app markup: {} bytes", app_html.len());
    log::debug!("{}", app_html);

    print!("{}", PageShell::new(&config).render(&app_html, &props));
    Ok(())
}
