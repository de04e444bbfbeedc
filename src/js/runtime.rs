//! QuickJS 运行时

use crate::entry::{self, ENTRY_NAME};
use crate::error::{RenderError, Result};
use crate::props::PropertyBag;
use once_cell::unsync::OnceCell;
use rquickjs::{Context, Ctx, Error as JsError, Exception, Function, Result as JsResult, Runtime, Value};

/// 原生渲染函数在 JS 中的名称
const NATIVE_RENDER: &str = "__native_render";

/// JS 运行时
pub struct JsRuntime {
    // context 依赖 runtime，需保持存活
    #[allow(dead_code)]
    runtime: Runtime,
    context: Context,
    installed: OnceCell<()>,
}

impl JsRuntime {
    pub fn new() -> Result<Self> {
        let runtime = Runtime::new().map_err(|e| RenderError::Script(e.to_string()))?;
        let context = Context::full(&runtime).map_err(|e| RenderError::Script(e.to_string()))?;

        Ok(Self {
            runtime,
            context,
            installed: OnceCell::new(),
        })
    }

    /// 执行 JS 代码
    pub fn eval(&self, code: &str) -> Result<String> {
        self.context.with(|ctx| {
            let result: JsResult<Value> = ctx.eval(code);
            match result {
                Ok(val) => Ok(value_to_string(&val)),
                Err(e) => Err(RenderError::Script(error_message(&ctx, e))),
            }
        })
    }

    /// 在 globalThis 上发布渲染入口，每个上下文只发布一次
    pub fn install_entry(&self) -> Result<()> {
        self.installed
            .get_or_try_init(|| {
                entry::init();
                self.context.with(|ctx| {
                    let native = Function::new(
                        ctx.clone(),
                        |ctx: Ctx<'_>, props_json: String| -> JsResult<String> {
                            entry::render_json(&props_json)
                                .map_err(|e| Exception::throw_message(&ctx, &e.to_string()))
                        },
                    )
                    .map_err(|e| RenderError::Script(e.to_string()))?;

                    ctx.globals()
                        .set(NATIVE_RENDER, native)
                        .map_err(|e| RenderError::Script(e.to_string()))
                })?;

                self.eval(&format!(
                    r#"Object.defineProperty(globalThis, "{name}", {{
                        value: function (props) {{
                            return {native}(JSON.stringify(props === undefined ? null : props));
                        }},
                        writable: false,
                        configurable: false,
                        enumerable: true
                    }});"#,
                    name = ENTRY_NAME,
                    native = NATIVE_RENDER,
                ))?;
                log::debug!("installed globalThis.{} in QuickJS context", ENTRY_NAME);
                Ok(())
            })
            .map(|_| ())
    }

    pub fn is_installed(&self) -> bool {
        self.installed.get().is_some()
    }

    /// 以宿主方式调用入口：`render(<props>)`
    ///
    /// 原生渲染失败时以 JS 异常抛出，经过脚本后只保留错误消息，
    /// 返回 `RenderError::Script(message)`。需要区分错误种类时直接调用 `entry::render`。
    pub fn render(&self, props: &PropertyBag) -> Result<String> {
        self.install_entry()?;
        self.eval(&format!("{}({})", ENTRY_NAME, props.to_json()))
    }

    /// props 以 JSON 文本传入，先校验再拼接脚本
    pub fn render_json(&self, props_json: &str) -> Result<String> {
        let props = PropertyBag::from_json(props_json)?;
        self.render(&props)
    }
}

/// 将 JS Value 转换为字符串
fn value_to_string(val: &Value) -> String {
    if val.is_undefined() {
        "undefined".to_string()
    } else if val.is_null() {
        "null".to_string()
    } else if let Some(s) = val.as_string() {
        s.to_string().unwrap_or_default()
    } else if let Some(n) = val.as_int() {
        n.to_string()
    } else if let Some(n) = val.as_float() {
        n.to_string()
    } else if let Some(b) = val.as_bool() {
        b.to_string()
    } else {
        "[object]".to_string()
    }
}

/// 取出挂起异常的 message
fn error_message(ctx: &Ctx<'_>, err: JsError) -> String {
    if !matches!(err, JsError::Exception) {
        return err.to_string();
    }
    let caught = ctx.catch();
    caught
        .as_object()
        .and_then(|obj| obj.get::<_, String>("message").ok())
        .unwrap_or_else(|| value_to_string(&caught))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eval() {
        let rt = JsRuntime::new().unwrap();
        assert_eq!(rt.eval("1 + 2").unwrap(), "3");
        assert_eq!(rt.eval("'a' + 'b'").unwrap(), "ab");
    }

    #[test]
    fn test_eval_error_message() {
        let rt = JsRuntime::new().unwrap();
        let err = rt.eval("throw new Error('boom')").unwrap_err();
        assert_eq!(err, RenderError::Script("boom".to_string()));
    }

    #[test]
    fn test_render_through_global() {
        let rt = JsRuntime::new().unwrap();
        let props = PropertyBag::from_value(json!({"message": "hello"})).unwrap();
        let html = rt.render(&props).unwrap();
        assert_eq!(html, entry::render(&props).unwrap());
        assert!(rt.is_installed());
    }

    #[test]
    fn test_install_twice_keeps_one_entry() {
        let rt = JsRuntime::new().unwrap();
        rt.install_entry().unwrap();
        rt.install_entry().unwrap();
        assert_eq!(rt.eval("typeof render").unwrap(), "function");

        // 入口不可被重新赋值
        rt.eval("try { render = null; } catch (e) {}").unwrap();
        assert_eq!(rt.eval("typeof render").unwrap(), "function");
        assert_eq!(
            rt.eval("render({message: '<b>x</b>'})").unwrap(),
            entry::render_json(r#"{"message":"<b>x</b>"}"#).unwrap()
        );
    }

    #[test]
    fn test_missing_props_from_script() {
        let rt = JsRuntime::new().unwrap();
        rt.install_entry().unwrap();
        assert!(rt.eval("render()").unwrap().contains("<p></p>"));
        assert!(rt.eval("render({})").unwrap().contains("<p></p>"));
    }

    #[test]
    fn test_native_error_becomes_exception() {
        let rt = JsRuntime::new().unwrap();
        rt.install_entry().unwrap();
        let caught = rt
            .eval("try { render(5); 'no error' } catch (e) { e.message }")
            .unwrap();
        assert_eq!(caught, "props must be an object, got number");
    }

    #[test]
    fn test_native_error_keeps_message_only() {
        let rt = JsRuntime::new().unwrap();
        rt.install_entry().unwrap();
        // 宿主侧校验保留原错误种类
        assert!(matches!(rt.render_json("[1]"), Err(RenderError::InvalidProps(_))));
        // 经过脚本后只剩消息
        assert_eq!(
            rt.eval("render([1])").unwrap_err(),
            RenderError::Script("props must be an object, got array".to_string())
        );
    }
}
