//! メインアプリケーションコンポーネント

use call_analyzer_common::intake::ACCEPT_ATTRIBUTE;
use call_analyzer_common::{Section, UiEvent};
use leptos::ev;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::{
    header::Header,
    notifications::Notifications,
    progress_bar::ProgressBar,
    results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use crate::controller::{selected_file, Controller};
use crate::theme_store;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller = Controller::new(theme_store::load_theme());
    controller.start();
    let state = controller.view();

    // キーボードショートカット
    let _ = window_event_listener(ev::keydown, move |ev| controller.handle_key(&ev));
    // ドロップゾーン外へのドロップでブラウザがファイルを開かないようにする
    let _ = window_event_listener(ev::dragover, |ev| ev.prevent_default());
    let _ = window_event_listener(ev::drop, |ev| ev.prevent_default());

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            controller.dispatch(UiEvent::FilePicked(selected_file(file)));
        }
    };

    let theme = Signal::derive(move || state.with(|s| s.theme));
    let progress = Signal::derive(move || state.with(|s| s.progress.clone()));
    let toasts = Signal::derive(move || state.with(|s| s.toasts.clone()));
    let showing = move |section: Section| state.with(|s| s.section == section);

    view! {
        <div class="container">
            <Header
                theme=theme
                on_toggle_theme=move |_| controller.dispatch(UiEvent::ToggleTheme)
            />

            <input
                type="file"
                id="audioFile"
                accept=ACCEPT_ATTRIBUTE
                style="display: none"
                node_ref=controller.file_input()
                on:change=on_file_change
            />

            <main>
                <Show when=move || showing(Section::Upload)>
                    <UploadArea controller=controller />
                </Show>

                <Show when=move || showing(Section::Processing)>
                    <ProgressBar progress=progress />
                </Show>

                <Show when=move || showing(Section::Results)>
                    <ResultsPanel controller=controller />
                </Show>
            </main>

            <Notifications toasts=toasts />
        </div>
    }
}
