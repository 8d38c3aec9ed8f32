use call_analyzer_common::IntakeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallAnalyzerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// 受付チェックで弾かれた（メッセージはそのまま表示）
    #[error("{0}")]
    Intake(#[from] IntakeError),

    /// サーバー側の解析失敗
    #[error("解析に失敗しました: {0}")]
    Server(String),

    #[error("送信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("レスポンスの解釈に失敗: {0}")]
    Common(#[from] call_analyzer_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CallAnalyzerError>;
