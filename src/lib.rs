//! Mini SSR - 服务端渲染引擎
//! 将组件节点树序列化为 HTML 字符串，供外部宿主（QuickJS / C）按名称调用

mod error;
pub use error::{RenderError, Result};

// 节点树与属性包
pub mod node;
pub mod props;

pub use node::{element, text, VNode, VNodeType};
pub use props::PropertyBag;

// 组件定义
pub mod component;
pub use component::{App, Component};

// HTML 序列化
pub mod serializer;
pub use serializer::{escape_html, render_to_string};

// 渲染入口与全局入口表
pub mod entry;
pub mod registry;
pub use entry::{render, render_json, ENTRY_NAME};

// 配置与页面外壳
pub mod config;
pub mod page;
pub use config::SsrConfig;

// JS 引擎绑定
pub mod js;

// FFI 导出
mod ffi;
pub use ffi::*;

// 单元测试
#[cfg(test)]
mod tests;
