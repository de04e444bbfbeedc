//! 节点树序列化
//!
//! 深度优先前序遍历：开标签、依次输出子节点、闭标签。
//! 无子节点的元素输出自闭合形式。

use crate::error::{RenderError, Result};
use crate::node::{VNode, VNodeType};
use std::borrow::Cow;

/// 最大嵌套层数
pub const MAX_DEPTH: usize = 256;

/// 将节点树序列化为标记字符串
pub fn render_to_string(node: &VNode) -> Result<String> {
    let mut out = String::with_capacity(64 + node.text_len() * 2);
    write_node(node, 0, &mut out)?;
    Ok(out)
}

fn write_node(node: &VNode, depth: usize, out: &mut String) -> Result<()> {
    if depth >= MAX_DEPTH {
        return Err(RenderError::TooDeep(MAX_DEPTH));
    }

    match node.node_type() {
        VNodeType::Text => {
            out.push_str(&escape_html(node.text_content()));
        }
        VNodeType::Element => {
            let tag = node.tag_name();
            if !is_valid_name(tag) {
                return Err(RenderError::InvalidTagName(tag.to_string()));
            }

            out.push('<');
            out.push_str(tag);
            for (name, value) in node.attrs() {
                if !is_valid_name(name) {
                    return Err(RenderError::InvalidAttributeName {
                        tag: tag.to_string(),
                        name: name.clone(),
                    });
                }
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }

            if node.children().is_empty() {
                out.push_str("/>");
                return Ok(());
            }

            out.push('>');
            for child in node.children() {
                write_node(child, depth + 1, out)?;
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }

    Ok(())
}

/// 转义 `& < > " '`，无需转义时不分配
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let first = match input.find(['&', '<', '>', '"', '\'']) {
        Some(pos) => pos,
        None => return Cow::Borrowed(input),
    };

    let mut escaped = String::with_capacity(input.len() + 16);
    escaped.push_str(&input[..first]);
    for c in input[first..].chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
