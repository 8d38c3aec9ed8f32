//! 解析結果の表示用変換
//!
//! レスポンスを画面に出せる形（テキスト、パーセント、CSSクラス）に整える。
//! 文字列は全てテキストとして扱い、マークアップとしては解釈しない。

use crate::intake::to_fixed;
use crate::types::{AnalysisResult, DetailedScores, VaderScores};
use regex::Regex;
use serde_json::Value;

pub const NO_SUMMARY: &str = "No summary available";
pub const NO_SENTIMENT: &str = "No sentiment analysis available";
pub const NO_SUGGESTIONS: &str = "No suggestions available";

const DEFAULT_LABEL: &str = "neutral";
const DEFAULT_CONFIDENCE: &str = "medium";

/// スコアバーのアニメーション開始までの遅延
pub const SCORE_REVEAL_DELAY_MS: u32 = 500;

/// 画面表示用に整形した解析結果
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResults {
    pub summary: String,
    pub sentiment_text: String,
    pub details: Option<SentimentDetails>,
    pub suggestions: SuggestionsView,
}

/// 感情分析の詳細パネル
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentDetails {
    pub badge: SentimentBadge,
    pub scores: Option<ScoreBreakdown>,
    pub indicators: Vec<IndicatorTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentBadge {
    pub text: String,
    pub class: String,
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub positive: ScoreBar,
    pub negative: ScoreBar,
    pub neutral: ScoreBar,
    /// compoundスコア（小数3桁）
    pub compound: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBar {
    pub percent: i64,
}

impl ScoreBar {
    pub fn from_fraction(score: f64) -> Self {
        Self {
            percent: (score * 100.0).round() as i64,
        }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }

    /// アニメーション前は幅0
    pub fn width_style(&self, revealed: bool) -> String {
        let width = if revealed { self.percent } else { 0 };
        format!("width: {}%", width)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorTag {
    pub text: String,
    pub class: String,
    pub animation_delay: String,
}

/// 提案テキストの表示形式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionsView {
    /// 番号付き・箇条書きの行を抜き出した順序付きリスト
    List(Vec<String>),
    /// リスト化できなかった文字列全体
    Paragraph(String),
    /// 提案なし
    Placeholder,
}

impl SuggestionsView {
    /// レスポンスの suggestion 値から変換
    ///
    /// 空文字・null・文字列以外は全てプレースホルダ
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) if !text.is_empty() => Self::parse(text),
            _ => Self::Placeholder,
        }
    }

    /// 自由記述の提案文をリストに変換する
    ///
    /// 行頭が `N.` の行、または `*` `•` を含む行だけを拾い、行頭の記号を落とす。
    /// 一行も拾えなければ全体を段落として返す。
    pub fn parse(text: &str) -> Self {
        lazy_static::lazy_static! {
            static ref NUMBERED_RE: Regex = Regex::new(r"^[0-9]+\.").unwrap();
            static ref MARKER_RE: Regex = Regex::new(r"^[0-9.*•\s]+").unwrap();
        }

        let items: Vec<String> = text
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .filter(|line| {
                NUMBERED_RE.is_match(line.trim()) || line.contains('*') || line.contains('•')
            })
            .map(|line| MARKER_RE.replace(line, "").trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();

        if items.is_empty() {
            Self::Paragraph(text.to_string())
        } else {
            Self::List(items)
        }
    }

    /// エクスポート用のプレーンテキスト（リストは1項目1行）
    pub fn text_content(&self) -> String {
        match self {
            Self::List(items) => items.join("\n"),
            Self::Paragraph(text) => text.clone(),
            Self::Placeholder => NO_SUGGESTIONS.to_string(),
        }
    }
}

/// `very_positive` → `very positive`（最初の`_`のみ置換）
pub fn humanize_label(label: &str) -> String {
    label.replacen('_', " ", 1)
}

/// レスポンス全体を表示用に変換
pub fn render_results(result: &AnalysisResult) -> RenderedResults {
    let summary = value_text(&result.summary).unwrap_or_else(|| NO_SUMMARY.to_string());

    let sentiment_text = result
        .sentiment
        .as_ref()
        .and_then(|s| non_empty(s.narrative()))
        .unwrap_or(NO_SENTIMENT);

    let details = result
        .sentiment
        .as_ref()
        .and_then(|s| s.detailed_scores())
        .map(render_details);

    RenderedResults {
        summary,
        sentiment_text: sentiment_text.to_string(),
        details,
        suggestions: SuggestionsView::from_value(&result.suggestion),
    }
}

fn render_details(detailed: &DetailedScores) -> SentimentDetails {
    let label = non_empty(detailed.sentiment_label.as_deref()).unwrap_or(DEFAULT_LABEL);
    let confidence = non_empty(detailed.confidence.as_deref()).unwrap_or(DEFAULT_CONFIDENCE);

    SentimentDetails {
        badge: SentimentBadge {
            text: humanize_label(label),
            class: format!("sentiment-badge {}", label),
            confidence: confidence.to_string(),
        },
        scores: detailed.vader_scores.as_ref().map(render_scores),
        indicators: render_indicators(&detailed.emotional_indicators),
    }
}

fn render_scores(scores: &VaderScores) -> ScoreBreakdown {
    ScoreBreakdown {
        positive: ScoreBar::from_fraction(scores.positive),
        negative: ScoreBar::from_fraction(scores.negative),
        neutral: ScoreBar::from_fraction(scores.neutral),
        compound: to_fixed(scores.compound, 3),
    }
}

/// 感情タグ（0.1秒ずつずらしてフェードイン）
pub fn render_indicators(indicators: &[String]) -> Vec<IndicatorTag> {
    indicators
        .iter()
        .enumerate()
        .map(|(index, indicator)| IndicatorTag {
            text: humanize_label(indicator),
            class: format!("indicator-tag {} fade-in", indicator),
            animation_delay: format!("{}s", index as f64 / 10.0),
        })
        .collect()
}

/// 文字列はそのまま、数値などはJSON表記で表示する（null・空文字は`None`）
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_result(value: Value) -> AnalysisResult {
        serde_json::from_value(value).expect("デシリアライズ失敗")
    }

    // =============================================
    // 提案リスト変換
    // =============================================

    #[test]
    fn test_suggestions_numbered_lines() {
        let view = SuggestionsView::parse("1. Stay calm\n2. Listen actively\nSome note");
        assert_eq!(
            view,
            SuggestionsView::List(vec!["Stay calm".to_string(), "Listen actively".to_string()])
        );
    }

    #[test]
    fn test_suggestions_bullets() {
        let text = "Here are some ideas:\n* Ask open questions\n• Summarize back\n\n  - plain dash";
        let view = SuggestionsView::parse(text);
        assert_eq!(
            view,
            SuggestionsView::List(vec![
                "Ask open questions".to_string(),
                "Summarize back".to_string(),
            ])
        );
    }

    #[test]
    fn test_suggestions_markdown_bold_numbered() {
        let text = "1. **Acknowledge** the stress.\n   2. Follow up next week.";
        let view = SuggestionsView::parse(text);
        assert_eq!(
            view,
            SuggestionsView::List(vec![
                "Acknowledge** the stress.".to_string(),
                "Follow up next week.".to_string(),
            ])
        );
    }

    #[test]
    fn test_suggestions_crlf_lines() {
        let view = SuggestionsView::parse("1. First\r\n2. Second\r\n");
        assert_eq!(
            view,
            SuggestionsView::List(vec!["First".to_string(), "Second".to_string()])
        );
    }

    #[test]
    fn test_suggestions_marker_only_lines_dropped() {
        let view = SuggestionsView::parse("***\n1. Real item");
        assert_eq!(view, SuggestionsView::List(vec!["Real item".to_string()]));
    }

    #[test]
    fn test_suggestions_paragraph_fallback() {
        let text = "Try to slow down and let the student finish.";
        assert_eq!(
            SuggestionsView::parse(text),
            SuggestionsView::Paragraph(text.to_string())
        );
    }

    #[test]
    fn test_suggestions_markup_kept_as_text() {
        let text = "<b>not markup</b>";
        assert_eq!(
            SuggestionsView::from_value(&json!(text)),
            SuggestionsView::Paragraph(text.to_string())
        );
    }

    #[test]
    fn test_suggestions_placeholder_for_non_string() {
        for value in [json!(null), json!(""), json!(12), json!(["a", "b"]), json!({"a": 1}), json!(true)] {
            assert_eq!(SuggestionsView::from_value(&value), SuggestionsView::Placeholder);
        }
    }

    #[test]
    fn test_suggestions_text_content() {
        let list = SuggestionsView::List(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(list.text_content(), "A\nB");
        assert_eq!(SuggestionsView::Placeholder.text_content(), NO_SUGGESTIONS);
        assert_eq!(SuggestionsView::Paragraph("p".into()).text_content(), "p");
    }

    // =============================================
    // スコア・バッジ
    // =============================================

    #[test]
    fn test_score_bar_rounding() {
        assert_eq!(ScoreBar::from_fraction(0.0).percent, 0);
        assert_eq!(ScoreBar::from_fraction(0.214).percent, 21);
        assert_eq!(ScoreBar::from_fraction(0.716).percent, 72);
        assert_eq!(ScoreBar::from_fraction(1.0).percent, 100);
        assert_eq!(ScoreBar::from_fraction(0.5).label(), "50%");
    }

    #[test]
    fn test_score_bar_width_before_reveal() {
        let bar = ScoreBar::from_fraction(0.42);
        assert_eq!(bar.width_style(false), "width: 0%");
        assert_eq!(bar.width_style(true), "width: 42%");
    }

    #[test]
    fn test_render_full_results() {
        let result = parse_result(json!({
            "summary": "Summary text",
            "sentiment": {
                "gemini_analysis": "Narrative",
                "detailed_scores": {
                    "vader_scores": {"positive": 0.3, "negative": 0.1, "neutral": 0.6, "compound": 0.5267},
                    "sentiment_label": "very_positive",
                    "confidence": "high",
                    "emotional_indicators": ["positive_language", "uncertainty"]
                }
            },
            "suggestion": "1. One\n2. Two"
        }));

        let rendered = render_results(&result);
        assert_eq!(rendered.summary, "Summary text");
        assert_eq!(rendered.sentiment_text, "Narrative");

        let details = rendered.details.expect("詳細がない");
        assert_eq!(details.badge.text, "very positive");
        assert_eq!(details.badge.class, "sentiment-badge very_positive");
        assert_eq!(details.badge.confidence, "high");

        let scores = details.scores.expect("スコアがない");
        assert_eq!(scores.positive.percent, 30);
        assert_eq!(scores.negative.percent, 10);
        assert_eq!(scores.neutral.percent, 60);
        assert_eq!(scores.compound, "0.527");

        assert_eq!(details.indicators.len(), 2);
        assert_eq!(details.indicators[0].text, "positive language");
        assert_eq!(details.indicators[0].class, "indicator-tag positive_language fade-in");
        assert_eq!(details.indicators[0].animation_delay, "0s");
        assert_eq!(details.indicators[1].animation_delay, "0.1s");

        assert_eq!(
            rendered.suggestions,
            SuggestionsView::List(vec!["One".to_string(), "Two".to_string()])
        );
    }

    #[test]
    fn test_render_partial_payload() {
        let rendered = render_results(&parse_result(json!({"summary": ""})));
        assert_eq!(rendered.summary, NO_SUMMARY);
        assert_eq!(rendered.sentiment_text, NO_SENTIMENT);
        assert!(rendered.details.is_none());
        assert_eq!(rendered.suggestions, SuggestionsView::Placeholder);
    }

    #[test]
    fn test_render_badge_defaults() {
        let rendered = render_results(&parse_result(json!({
            "sentiment": {"detailed_scores": {"sentiment_label": "", "emotional_indicators": []}}
        })));
        let details = rendered.details.expect("詳細がない");
        assert_eq!(details.badge.text, "neutral");
        assert_eq!(details.badge.class, "sentiment-badge neutral");
        assert_eq!(details.badge.confidence, "medium");
        assert!(details.scores.is_none());
        assert!(details.indicators.is_empty());
    }

    #[test]
    fn test_render_plain_text_sentiment() {
        let rendered = render_results(&parse_result(json!({"sentiment": "Calm throughout."})));
        assert_eq!(rendered.sentiment_text, "Calm throughout.");
        assert!(rendered.details.is_none());
    }

    #[test]
    fn test_negative_compound_formatting() {
        let scores = render_scores(&VaderScores {
            compound: -0.25,
            ..Default::default()
        });
        assert_eq!(scores.compound, "-0.250");
    }

    #[test]
    fn test_compound_rounds_half_up() {
        let rendered = render_results(&parse_result(json!({
            "sentiment": {"detailed_scores": {"vader_scores": {"compound": 0.0625}}}
        })));
        let scores = rendered
            .details
            .and_then(|d| d.scores)
            .expect("scoresがない");
        assert_eq!(scores.compound, "0.063");
    }

    #[test]
    fn test_render_numeric_summary() {
        let result = crate::response::parse_process_response(true, r#"{"summary": 42}"#)
            .expect("パース失敗");
        assert_eq!(render_results(&result).summary, "42");
    }

    #[test]
    fn test_render_null_indicators_keep_narrative() {
        let rendered = render_results(&parse_result(json!({
            "sentiment": {
                "gemini_analysis": "Calm",
                "detailed_scores": {"sentiment_label": "neutral", "emotional_indicators": null}
            }
        })));
        assert_eq!(rendered.sentiment_text, "Calm");
        let details = rendered.details.expect("detailsがない");
        assert_eq!(details.badge.text, "neutral");
        assert!(details.indicators.is_empty());
    }

    #[test]
    fn test_suggestions_non_ascii_digits_are_not_numbered() {
        let view = SuggestionsView::parse("١. foo\n٢. bar");
        assert_eq!(view, SuggestionsView::Paragraph("١. foo\n٢. bar".to_string()));
    }
}
