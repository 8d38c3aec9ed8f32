//! テキストエクスポート
//!
//! 表示中の結果を固定テンプレートのプレーンテキストにする。
//! 日時はホスト側（ブラウザ/CLI）のローカル時刻文字列を受け取る。

pub const RESULTS_FILE_NAME: &str = "call-analysis-results.txt";
pub const SUGGESTIONS_FILE_NAME: &str = "counselor-suggestions.txt";

const RULE: &str = "========================";

/// ダウンロード対象のテキストファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExport {
    pub file_name: String,
    pub content: String,
}

/// 要約・感情分析・提案をまとめたレポート
pub fn results_document(summary: &str, sentiment: &str, suggestions: &str, generated_at: &str) -> TextExport {
    let content = format!(
        "Call Analysis Results\n{RULE}\n\nSummary:\n{summary}\n\nSentiment Analysis:\n{sentiment}\n\nAI Suggestions:\n{suggestions}\n\nGenerated on: {generated_at}\n"
    );
    TextExport {
        file_name: RESULTS_FILE_NAME.to_string(),
        content,
    }
}

/// カウンセラー向け提案のみ
pub fn suggestions_document(suggestions: &str, generated_at: &str) -> TextExport {
    let content = format!(
        "AI Counselor Suggestions\n{RULE}\n\n{suggestions}\n\nGenerated on: {generated_at}\n"
    );
    TextExport {
        file_name: SUGGESTIONS_FILE_NAME.to_string(),
        content,
    }
}
