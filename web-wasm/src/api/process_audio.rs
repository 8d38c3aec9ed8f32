//! `/process_audio` への音声アップロード
//!
//! multipart/form-data で `audio_file` フィールドに1ファイルを載せて POST する。
//! ステータスコードとボディの解釈は共通ライブラリ側に任せる。

use call_analyzer_common::response::{AUDIO_FIELD_NAME, PROCESS_AUDIO_PATH};
use call_analyzer_common::{parse_process_response, AnalysisResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

use super::js_error_message;

/// 音声ファイルを送信して解析結果を受け取る
///
/// エラーはそのままトーストに出せるメッセージで返す。
pub async fn process_audio(file: &File) -> Result<AnalysisResult, String> {
    let form = FormData::new().map_err(js_error_message)?;
    form.append_with_blob_and_filename(AUDIO_FIELD_NAME, file, &file.name())
        .map_err(js_error_message)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request =
        Request::new_with_str_and_init(PROCESS_AUDIO_PATH, &opts).map_err(js_error_message)?;

    let window = web_sys::window().ok_or("window is not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error_message)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error_message)?;

    let text = JsFuture::from(resp.text().map_err(js_error_message)?)
        .await
        .map_err(js_error_message)?;
    let body = text.as_string().unwrap_or_default();

    parse_process_response(resp.ok(), &body).map_err(|e| e.to_string())
}
