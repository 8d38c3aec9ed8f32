//! 解析結果のターミナル表示

use call_analyzer_common::notify::{Severity, Toast};
use call_analyzer_common::render::{ScoreBar, SentimentDetails};
use call_analyzer_common::{RenderedResults, SuggestionsView};
use std::fmt::Write;

/// スコアバーの文字数
const BAR_WIDTH: usize = 20;

/// トーストを1行のメッセージにする
pub fn format_toast(toast: &Toast) -> String {
    let mark = match toast.severity {
        Severity::Success => "✔",
        Severity::Error => "✖",
        Severity::Warning => "⚠",
        Severity::Info => "ℹ",
    };
    format!("{} {}", mark, toast.message)
}

/// `[########............]` 形式のバー
pub fn score_bar(bar: &ScoreBar) -> String {
    let filled = (bar.percent.clamp(0, 100) as usize * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// 結果全体を表示用テキストにする
pub fn format_report(results: &RenderedResults) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "── Call Summary ──");
    let _ = writeln!(out, "{}\n", results.summary);

    let _ = writeln!(out, "── Sentiment Analysis ──");
    let _ = writeln!(out, "{}", results.sentiment_text);
    if let Some(details) = &results.details {
        write_details(&mut out, details);
    }
    out.push('\n');

    let _ = writeln!(out, "── Counselor Suggestions ──");
    match &results.suggestions {
        SuggestionsView::List(items) => {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, item);
            }
        }
        other => {
            let _ = writeln!(out, "{}", other.text_content());
        }
    }

    out
}

fn write_details(out: &mut String, details: &SentimentDetails) {
    let _ = writeln!(
        out,
        "\nLabel: {} (confidence: {})",
        details.badge.text, details.badge.confidence
    );

    if let Some(scores) = &details.scores {
        for (label, bar) in [
            ("Positive", &scores.positive),
            ("Negative", &scores.negative),
            ("Neutral", &scores.neutral),
        ] {
            let _ = writeln!(out, "  {:<9}{} {:>4}", label, score_bar(bar), bar.label());
        }
        let _ = writeln!(out, "  Compound: {}", scores.compound);
    }

    if !details.indicators.is_empty() {
        let tags: Vec<&str> = details.indicators.iter().map(|t| t.text.as_str()).collect();
        let _ = writeln!(out, "Indicators: {}", tags.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use call_analyzer_common::{render_results, AnalysisResult};
    use serde_json::json;

    fn sample_results() -> RenderedResults {
        let result: AnalysisResult = serde_json::from_value(json!({
            "summary": "Caller asked about sleep problems.",
            "sentiment": {
                "gemini_analysis": "Mostly calm.",
                "detailed_scores": {
                    "vader_scores": { "positive": 0.5, "negative": 0.1, "neutral": 0.4, "compound": 0.8 },
                    "sentiment_label": "positive",
                    "confidence": "high",
                    "emotional_indicators": ["calm", "hopeful"]
                }
            },
            "suggestion": "1. Follow up next week\n2. Share resources"
        }))
        .expect("JSON変換失敗");
        render_results(&result)
    }

    #[test]
    fn test_score_bar_width() {
        assert_eq!(score_bar(&ScoreBar { percent: 0 }), format!("[{}]", ".".repeat(20)));
        assert_eq!(score_bar(&ScoreBar { percent: 100 }), format!("[{}]", "#".repeat(20)));
        assert_eq!(
            score_bar(&ScoreBar { percent: 50 }),
            format!("[{}{}]", "#".repeat(10), ".".repeat(10))
        );
    }

    #[test]
    fn test_score_bar_clamps_out_of_range() {
        assert_eq!(score_bar(&ScoreBar { percent: 130 }), format!("[{}]", "#".repeat(20)));
        assert_eq!(score_bar(&ScoreBar { percent: -5 }), format!("[{}]", ".".repeat(20)));
    }

    #[test]
    fn test_format_report_sections() {
        let report = format_report(&sample_results());

        assert!(report.contains("Caller asked about sleep problems."));
        assert!(report.contains("Mostly calm."));
        assert!(report.contains("Label: positive (confidence: high)"));
        assert!(report.contains("Compound: 0.800"));
        assert!(report.contains("Indicators: calm, hopeful"));
        assert!(report.contains("1. Follow up next week\n2. Share resources\n"));
    }

    #[test]
    fn test_format_report_placeholders() {
        let report = format_report(&render_results(&AnalysisResult::default()));

        assert!(report.contains("No summary available"));
        assert!(report.contains("No sentiment analysis available"));
        assert!(report.contains("No suggestions available"));
        assert!(!report.contains("Label:"));
    }
}
