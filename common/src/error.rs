//! エラー型定義

use thiserror::Error;

/// ファイル受付（インテーク）の拒否理由
///
/// Display文字列はそのままユーザー向け通知に使われる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Please select a valid audio file (MP3, WAV, M4A, FLAC)")]
    UnsupportedType { file_name: String, mime_type: String },

    #[error("File size must be less than 100MB")]
    TooLarge { file_name: String, size: u64 },
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// レスポンスボディがJSONとして読めない
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// サーバーが返したエラーメッセージ（そのまま表示する）
    #[error("{0}")]
    Server(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_server_message_shown_verbatim() {
        let error = Error::Server("No file uploaded".to_string());
        assert_eq!(error.to_string(), "No file uploaded");
    }

    #[test]
    fn test_intake_error_messages_are_user_facing() {
        let unsupported = IntakeError::UnsupportedType {
            file_name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
        };
        assert_eq!(
            unsupported.to_string(),
            "Please select a valid audio file (MP3, WAV, M4A, FLAC)"
        );

        let too_large = IntakeError::TooLarge {
            file_name: "long.wav".to_string(),
            size: 200 * 1024 * 1024,
        };
        assert_eq!(too_large.to_string(), "File size must be less than 100MB");
    }
}
