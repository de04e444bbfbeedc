//! FFI 接口 - C/C++ 宿主绑定
//!
//! 返回的字符串由本库分配，宿主用 `ssr_string_free` 释放。

use crate::entry::{self, ENTRY_NAME};
use crate::registry;
use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// C 侧渲染函数签名
pub type SsrRenderFn = extern "C" fn(*const c_char) -> *mut c_char;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: String) {
    log::warn!("ssr ffi: {}", msg);
    let msg = CString::new(msg.replace('\0', " ")).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(msg));
}

fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// 发布入口表
#[no_mangle]
pub extern "C" fn ssr_init() {
    entry::init();
}

/// 渲染，失败返回 NULL
///
/// C 字符串不能携带 NUL：message 中含 U+0000 时同样返回 NULL，
/// 原因可由 `ssr_last_error` 取得。需要完整字符串的宿主走 QuickJS 入口。
#[no_mangle]
pub extern "C" fn ssr_render(props_json: *const c_char) -> *mut c_char {
    clear_last_error();
    entry::init();

    let json = if props_json.is_null() {
        "{}"
    } else {
        match unsafe { CStr::from_ptr(props_json) }.to_str() {
            Ok(s) => s,
            Err(e) => {
                set_last_error(format!("props are not valid UTF-8: {}", e));
                return ptr::null_mut();
            }
        }
    };

    match entry::render_json(json) {
        Ok(html) => match CString::new(html) {
            Ok(s) => s.into_raw(),
            Err(e) => {
                set_last_error(format!("rendered markup contains NUL at {}", e.nul_position()));
                ptr::null_mut()
            }
        },
        Err(e) => {
            set_last_error(e.to_string());
            ptr::null_mut()
        }
    }
}

/// 按名称查找入口，未知名称返回 NULL
#[no_mangle]
pub extern "C" fn ssr_lookup(name: *const c_char) -> Option<SsrRenderFn> {
    if name.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(name) }.to_str().ok()?;
    registry::publish();
    registry::lookup(name)?;
    match name {
        ENTRY_NAME => Some(ssr_render as SsrRenderFn),
        _ => None,
    }
}

/// 释放 `ssr_render` 返回的字符串
#[no_mangle]
pub extern "C" fn ssr_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

/// 当前线程最近一次错误，指针在下次调用前有效
#[no_mangle]
pub extern "C" fn ssr_last_error() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        ssr_string_free(ptr);
        s
    }

    #[test]
    fn test_render_roundtrip() {
        let props = CString::new(r#"{"message":"hello"}"#).unwrap();
        let html = take(ssr_render(props.as_ptr()));
        assert!(html.ends_with("<p>hello</p></div>"));
        assert!(ssr_last_error().is_null());
    }

    #[test]
    fn test_null_props_renders_placeholder() {
        let html = take(ssr_render(ptr::null()));
        assert!(html.contains("<p></p>"));
    }

    #[test]
    fn test_error_sets_last_error() {
        let props = CString::new("[]").unwrap();
        assert!(ssr_render(props.as_ptr()).is_null());
        let err = unsafe { CStr::from_ptr(ssr_last_error()) }.to_str().unwrap();
        assert_eq!(err, "props must be an object, got array");
    }

    #[test]
    fn test_nul_in_message_reports_error() {
        let props = CString::new(r#"{"message":"a\u0000b"}"#).unwrap();
        assert!(ssr_render(props.as_ptr()).is_null());
        let err = unsafe { CStr::from_ptr(ssr_last_error()) }.to_str().unwrap();
        assert!(err.starts_with("rendered markup contains NUL at "), "{}", err);

        // 下一次成功调用清除错误
        assert!(!take(ssr_render(ptr::null())).is_empty());
        assert!(ssr_last_error().is_null());
    }

    #[test]
    fn test_lookup_by_name() {
        ssr_init();
        let name = CString::new("render").unwrap();
        let render = ssr_lookup(name.as_ptr()).unwrap();
        let props = CString::new(r#"{"message":"via table"}"#).unwrap();
        assert!(take(render(props.as_ptr())).contains("<p>via table</p>"));

        let unknown = CString::new("hydrate").unwrap();
        assert!(ssr_lookup(unknown.as_ptr()).is_none());
        assert!(ssr_lookup(ptr::null()).is_none());
    }
}
