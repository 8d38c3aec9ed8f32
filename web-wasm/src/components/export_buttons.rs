//! エクスポートボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ExportButtons<FA, FR, FS>(
    on_analyze_another: FA,
    on_export_results: FR,
    on_export_suggestions: FS,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    view! {
        <div class="export-buttons">
            <button
                id="analyzeAnother"
                class="btn btn-primary"
                on:click=move |_| on_analyze_another(())
            >
                <i class="fas fa-redo"></i>
                " Analyze Another Call"
            </button>

            <button
                id="exportResults"
                class="btn btn-secondary"
                on:click=move |_| on_export_results(())
            >
                <i class="fas fa-download"></i>
                " Export Results"
            </button>

            <button
                id="exportSuggestions"
                class="btn btn-secondary"
                on:click=move |_| on_export_suggestions(())
            >
                <i class="fas fa-lightbulb"></i>
                " Export Suggestions"
            </button>
        </div>
    }
}
