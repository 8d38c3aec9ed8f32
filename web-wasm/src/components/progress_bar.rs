//! 処理中セクション（ステップ表示とプログレスバー）

use call_analyzer_common::progress::{ProgressState, PROCESSING_STEPS};
use leptos::prelude::*;

#[component]
pub fn ProgressBar(progress: Signal<ProgressState>) -> impl IntoView {
    let steps = PROCESSING_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let title = step.title;
            view! {
                <div class=move || progress.with(|p| p.steps[index].css_class())>
                    <div class="step-number">{index + 1}</div>
                    <span class="step-title">{title}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="processingSection" class="processing-section fade-in">
            <h2>"Analyzing your call"</h2>
            <div class="processing-steps">{steps}</div>
            <div class="progress-container">
                <div class="progress-bar">
                    <div
                        id="progressFill"
                        class="progress-fill"
                        style=move || progress.with(|p| p.width_style())
                    />
                </div>
                <p id="processingStatus" class="progress-text">
                    {move || progress.with(|p| p.status.clone())}
                </p>
            </div>
        </section>
    }
}
