//! バックエンドAPI

pub mod process_audio;

use wasm_bindgen::{JsCast, JsValue};

/// JS側の例外を表示用の文字列にする
pub(crate) fn js_error_message(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
