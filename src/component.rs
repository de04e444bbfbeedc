//! 组件定义 - 由属性包生成节点树

use crate::node::{element, no_attrs, text, VNode};
use crate::props::PropertyBag;

pub const TITLE: &str = "Golang Rendering React (SSR)";
pub const SUBTITLE: &str = "using QuickJS + ESBuild";

/// 缺少 message 时的占位文本
pub const MESSAGE_PLACEHOLDER: &str = "";

/// 组件 trait
///
/// `render` 必须是纯函数：相同的 props 产生结构相同的树。
pub trait Component: Send + Sync {
    fn render(&self, props: &PropertyBag) -> VNode;
}

/// 首页组件
#[derive(Debug, Clone, Copy, Default)]
pub struct App;

impl Component for App {
    fn render(&self, props: &PropertyBag) -> VNode {
        let message = props
            .get_text("message")
            .unwrap_or_else(|| MESSAGE_PLACEHOLDER.to_string());

        element(
            "div",
            no_attrs(),
            vec![
                element("h2", no_attrs(), vec![text(TITLE)]),
                element("h3", no_attrs(), vec![text(SUBTITLE)]),
                element("p", no_attrs(), vec![text(&message)]),
            ],
        )
    }
}
