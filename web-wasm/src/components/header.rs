//! ヘッダーコンポーネント

use call_analyzer_common::Theme;
use leptos::prelude::*;

#[component]
pub fn Header<F>(theme: Signal<Theme>, on_toggle_theme: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <div class="header-title">
                <h1>"Call Analyzer"</h1>
                <p class="text-muted">"AI-powered insights for counseling calls"</p>
            </div>
            <button
                id="themeToggle"
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| on_toggle_theme(())
            >
                <i class=move || theme.get().toggle_icon()></i>
            </button>
        </header>
    }
}
