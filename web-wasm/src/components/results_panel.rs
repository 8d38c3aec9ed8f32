//! 解析結果セクション

use call_analyzer_common::render::{ScoreBar, SentimentDetails, NO_SUGGESTIONS};
use call_analyzer_common::{SuggestionsView, UiEvent};
use leptos::prelude::*;

use crate::components::export_buttons::ExportButtons;
use crate::controller::Controller;
use crate::export::local_timestamp;

#[component]
pub fn ResultsPanel(controller: Controller) -> impl IntoView {
    let state = controller.view();
    let scores_revealed = Signal::derive(move || state.with(|s| s.scores_revealed));
    let details_open = move || state.with(|s| s.details_open);

    let summary = move || {
        state.with(|s| s.results.as_ref().map(|r| r.summary.clone()).unwrap_or_default())
    };
    let sentiment_text = move || {
        state.with(|s| {
            s.results
                .as_ref()
                .map(|r| r.sentiment_text.clone())
                .unwrap_or_default()
        })
    };
    let details = move || {
        state
            .with(|s| s.results.as_ref().and_then(|r| r.details.clone()))
            .map(|details| view! { <SentimentDetailsPanel details=details scores_revealed=scores_revealed /> })
    };
    let suggestions = move || {
        let current = state.with(|s| s.results.as_ref().map(|r| r.suggestions.clone()));
        match current {
            Some(SuggestionsView::List(items)) => view! {
                <ol class="suggestions-list">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ol>
            }
            .into_any(),
            Some(SuggestionsView::Paragraph(text)) => view! { <p>{text}</p> }.into_any(),
            _ => view! { <p class="text-muted">{NO_SUGGESTIONS}</p> }.into_any(),
        }
    };

    view! {
        <section id="resultsSection" class="results-section fade-in">
            <div class="result-card">
                <h3><i class="fas fa-file-alt"></i>" Call Summary"</h3>
                <p id="summaryContent">{summary}</p>
            </div>

            <div class="result-card">
                <div class="card-header">
                    <h3><i class="fas fa-heart"></i>" Sentiment Analysis"</h3>
                    <button
                        id="toggleSentimentDetails"
                        class="btn-icon"
                        on:click=move |_| controller.dispatch(UiEvent::ToggleDetails)
                    >
                        <i class=move || {
                            if details_open() { "fas fa-chevron-up" } else { "fas fa-chevron-down" }
                        }></i>
                    </button>
                </div>
                <p id="sentimentAnalysis">{sentiment_text}</p>
                <Show when=details_open>
                    <div id="sentimentDetails" class="sentiment-details slide-up">{details}</div>
                </Show>
            </div>

            <div class="result-card">
                <h3><i class="fas fa-lightbulb"></i>" Counselor Suggestions"</h3>
                <div id="suggestionsContent">{suggestions}</div>
            </div>

            <ExportButtons
                on_analyze_another=move |_| controller.dispatch(UiEvent::AnalyzeAnother)
                on_export_results=move |_| {
                    controller.dispatch(UiEvent::ExportResults { generated_at: local_timestamp() })
                }
                on_export_suggestions=move |_| {
                    controller.dispatch(UiEvent::ExportSuggestions { generated_at: local_timestamp() })
                }
            />
        </section>
    }
}

/// ラベル、スコアバー、感情インジケーター
#[component]
fn SentimentDetailsPanel(details: SentimentDetails, scores_revealed: Signal<bool>) -> impl IntoView {
    let badge = details.badge;
    let scores = details.scores.map(|scores| {
        view! {
            <div class="score-bars">
                <ScoreRow label="Positive" kind="positive" bar=scores.positive revealed=scores_revealed />
                <ScoreRow label="Negative" kind="negative" bar=scores.negative revealed=scores_revealed />
                <ScoreRow label="Neutral" kind="neutral" bar=scores.neutral revealed=scores_revealed />
                <div class="compound-score">
                    <span>"Compound: "</span>
                    <strong id="compoundScore">{scores.compound}</strong>
                </div>
            </div>
        }
    });
    let indicators = (!details.indicators.is_empty()).then(|| {
        view! {
            <div id="emotionalIndicators" class="emotional-indicators">
                {details
                    .indicators
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <span class=tag.class style=format!("animation-delay: {}", tag.animation_delay)>
                                {tag.text}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="sentiment-label-row">
            <span id="sentimentBadge" class=badge.class>{badge.text}</span>
            <span id="confidenceLevel" class="confidence">{badge.confidence}</span>
        </div>
        {scores}
        {indicators}
    }
}

#[component]
fn ScoreRow(
    label: &'static str,
    kind: &'static str,
    bar: ScoreBar,
    revealed: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="score-item">
            <span class="score-label">{label}</span>
            <div class="score-bar">
                <div
                    id=format!("{}Bar", kind)
                    class=format!("score-fill {}", kind)
                    style=move || bar.width_style(revealed.get())
                ></div>
            </div>
            <span id=format!("{}Score", kind) class="score-value">
                {move || if revealed.get() { bar.label() } else { "0%".to_string() }}
            </span>
        </div>
    }
}
