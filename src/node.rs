//! 虚拟节点 - 描述一个元素或一段文本
//!
//! 节点构造后不可变，子节点顺序即输出顺序。

use std::collections::BTreeMap;

/// 节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VNodeType {
    Element,
    Text,
}

/// 虚拟节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VNode {
    node_type: VNodeType,
    tag_name: String,
    attributes: BTreeMap<String, String>,
    children: Vec<VNode>,
    text_content: String,
}

impl VNode {
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: VNodeType::Element,
            tag_name: tag_name.to_string(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text_content: String::new(),
        }
    }

    pub fn text(content: &str) -> Self {
        Self {
            node_type: VNodeType::Text,
            tag_name: String::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text_content: content.to_string(),
        }
    }

    /// 设置属性（文本节点忽略）
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if self.node_type == VNodeType::Element {
            self.attributes.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// 追加子节点（文本节点忽略）
    pub fn child(mut self, node: VNode) -> Self {
        if self.node_type == VNodeType::Element {
            self.children.push(node);
        }
        self
    }

    /// 追加文本子节点
    pub fn with_text(self, content: &str) -> Self {
        self.child(VNode::text(content))
    }

    pub fn node_type(&self) -> VNodeType {
        self.node_type
    }

    pub fn is_text(&self) -> bool {
        self.node_type == VNodeType::Text
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn children(&self) -> &[VNode] {
        &self.children
    }

    pub fn text_content(&self) -> &str {
        &self.text_content
    }

    /// 子树中所有文本的字符数
    pub fn text_len(&self) -> usize {
        match self.node_type {
            VNodeType::Text => self.text_content.chars().count(),
            VNodeType::Element => self.children.iter().map(VNode::text_len).sum(),
        }
    }
}

/// 创建元素节点
pub fn element<I, K, V>(tag_name: &str, attrs: I, children: Vec<VNode>) -> VNode
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut node = VNode::element(tag_name);
    node.attributes = attrs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    node.children = children;
    node
}

/// 创建文本节点
pub fn text(value: &str) -> VNode {
    VNode::text(value)
}

/// 无属性时传给 [`element`] 的空列表
pub fn no_attrs() -> Vec<(String, String)> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_child_order() {
        let node = VNode::element("div")
            .child(text("a"))
            .child(VNode::element("span").with_text("b"))
            .with_text("c");

        let kinds: Vec<VNodeType> = node.children().iter().map(|c| c.node_type()).collect();
        assert_eq!(kinds, vec![VNodeType::Text, VNodeType::Element, VNodeType::Text]);
        assert_eq!(node.children()[0].text_content(), "a");
        assert_eq!(node.children()[1].tag_name(), "span");
        assert_eq!(node.text_len(), 3);
    }

    #[test]
    fn test_text_node_ignores_children_and_attrs() {
        let node = text("hi").attr("class", "x").child(text("y"));
        assert!(node.is_text());
        assert!(node.attrs().is_empty());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_element_factory() {
        let node = element("a", [("href", "/"), ("class", "link")], vec![text("home")]);
        assert_eq!(node.get_attr("href"), Some("/"));
        let keys: Vec<&str> = node.attrs().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["class", "href"]);
        assert_eq!(node.children().len(), 1);
    }
}
