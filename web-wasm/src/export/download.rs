//! Blob + オブジェクトURL + 一時アンカーによるダウンロード

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::api::js_error_message;

/// テキストを `file_name` としてダウンロードさせる
pub fn download_text_file(file_name: &str, content: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob =
        Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error_message)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error_message)?;

    let result = click_anchor(&url, file_name);
    // クリック後はURLを保持しない
    let _ = Url::revoke_object_url(&url);
    result
}

fn click_anchor(url: &str, file_name: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document is not available")?;
    let body = document.body().ok_or("document has no body")?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error_message)?
        .dyn_into()
        .map_err(|_| "failed to create anchor element".to_string())?;
    anchor
        .set_attribute("style", "display: none")
        .map_err(js_error_message)?;
    anchor.set_href(url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_error_message)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error_message)?;
    Ok(())
}

/// エクスポートに埋め込むローカル日時（ブラウザのロケール表記）
pub fn local_timestamp() -> String {
    String::from(js_sys::Date::new_0().to_locale_string("default", &JsValue::UNDEFINED))
}
