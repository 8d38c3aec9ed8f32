//! `/process_audio` レスポンスの解釈
//!
//! ステータスとボディ文字列から解析結果またはエラーメッセージを取り出す。
//! ブラウザ版・CLI版で同じ判定を使う。

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, ErrorResponse};

/// エンドポイントのパス
pub const PROCESS_AUDIO_PATH: &str = "/process_audio";

/// multipartフォームのフィールド名
pub const AUDIO_FIELD_NAME: &str = "audio_file";

/// エラーボディに `error` がない場合のメッセージ
pub const DEFAULT_FAILURE_MESSAGE: &str = "Processing failed";

/// レスポンスを解釈する
///
/// ボディは成功・失敗どちらでも先にJSONとしてパースする。
/// パースできなければ失敗扱い。
///
/// # Arguments
/// * `success` - HTTPステータスが2xxか
/// * `body` - レスポンスボディ
pub fn parse_process_response(success: bool, body: &str) -> Result<AnalysisResult> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if success {
        let result: AnalysisResult = serde_json::from_value(value)?;
        Ok(result)
    } else {
        let error: ErrorResponse = serde_json::from_value(value).unwrap_or_default();
        let message = error
            .error
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        Err(Error::Server(message))
    }
}

/// ベースURLとエンドポイントパスを連結
pub fn endpoint_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), PROCESS_AUDIO_PATH)
}
