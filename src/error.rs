//! 渲染错误类型

use thiserror::Error;

/// 渲染过程中可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// props 不是对象
    #[error("props must be an object, got {0}")]
    InvalidProps(String),

    #[error("invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("invalid attribute name {name:?} on <{tag}>")]
    InvalidAttributeName { tag: String, name: String },

    /// 节点树嵌套超过上限
    #[error("node tree deeper than {0} levels")]
    TooDeep(usize),

    /// QuickJS 执行失败
    #[error("script error: {0}")]
    Script(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
