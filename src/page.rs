//! 页面外壳 - 把渲染结果嵌入完整 HTML 文档

use crate::config::SsrConfig;
use crate::props::PropertyBag;
use crate::serializer::escape_html;

/// 页面外壳
#[derive(Debug, Clone)]
pub struct PageShell<'a> {
    config: &'a SsrConfig,
}

impl<'a> PageShell<'a> {
    pub fn new(config: &'a SsrConfig) -> Self {
        Self { config }
    }

    /// `app_html` 已是序列化后的标记，原样嵌入
    pub fn render(&self, app_html: &str, props: &PropertyBag) -> String {
        let props_json = escape_script_json(&props.to_json());
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"{lang}\">\n",
                "<head>\n",
                "<meta charset=\"UTF-8\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
                "<title>{title}</title>\n",
                "<script>window.APP_PROPS = {props};</script>\n",
                "</head>\n",
                "<body>\n",
                "<div id=\"{mount}\">{app}</div>\n",
                "</body>\n",
                "</html>\n",
            ),
            lang = escape_html(&self.config.lang),
            title = escape_html(&self.config.page_title),
            props = props_json,
            mount = escape_html(&self.config.mount_id),
            app = app_html,
        )
    }
}

/// 转义嵌入 <script> 的 JSON，防止提前闭合标签
pub fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}
