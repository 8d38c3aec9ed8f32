//! 解析結果の型定義
//!
//! `/process_audio` のレスポンスをそのまま受け取る型。
//! バックエンドの出力は揺れがあるため、全フィールドを省略可能として
//! 緩くデシリアライズする。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// 選択されたファイルのメタデータ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    /// ブラウザが申告したMIMEタイプ（空文字のこともある）
    #[serde(default)]
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// 通話解析結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 通常は文字列だが、数値などもそのまま表示する
    #[serde(default)]
    pub summary: serde_json::Value,

    #[serde(default)]
    pub sentiment: Option<SentimentPayload>,

    /// 通常は文字列だが、文字列以外も受け付ける
    #[serde(default)]
    pub suggestion: serde_json::Value,
}

/// 感情分析フィールド
///
/// 構造化オブジェクトの他に、モデルの文章がそのまま返ることがある
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentimentPayload {
    Narrative(String),
    Report(SentimentReport),
    Unrecognized(serde_json::Value),
}

impl SentimentPayload {
    /// 表示用の感情分析テキスト
    pub fn narrative(&self) -> Option<&str> {
        match self {
            SentimentPayload::Narrative(text) => Some(text.as_str()),
            SentimentPayload::Report(report) => report.gemini_analysis.as_deref(),
            SentimentPayload::Unrecognized(_) => None,
        }
    }

    pub fn detailed_scores(&self) -> Option<&DetailedScores> {
        match self {
            SentimentPayload::Report(report) => report.detailed_scores.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentReport {
    #[serde(default, deserialize_with = "lenient")]
    pub gemini_analysis: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub detailed_scores: Option<DetailedScores>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailedScores {
    #[serde(default, deserialize_with = "lenient")]
    pub vader_scores: Option<VaderScores>,

    /// very_positive / positive / neutral / negative / very_negative
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment_label: Option<String>,

    /// high / medium / low
    #[serde(default, deserialize_with = "lenient")]
    pub confidence: Option<String>,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub emotional_indicators: Vec<String>,
}

/// VADERスコア（0〜1の比率、compoundは-1〜1）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaderScores {
    #[serde(deserialize_with = "lenient_or_default")]
    pub positive: f64,
    #[serde(deserialize_with = "lenient_or_default")]
    pub negative: f64,
    #[serde(deserialize_with = "lenient_or_default")]
    pub neutral: f64,
    #[serde(deserialize_with = "lenient_or_default")]
    pub compound: f64,
}

/// 型が合わない値や null を `None` として読み飛ばす
///
/// 1フィールドの揺れで感情分析全体が `Unrecognized` に落ちないようにする
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `lenient` の結果を既定値で埋める
fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

/// エラーレスポンス `{ "error": "..." }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
