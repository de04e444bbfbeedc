//! QuickJS 引擎绑定

mod runtime;

pub use runtime::JsRuntime;
