//! セッションとブラウザの橋渡し
//!
//! `Session` にイベントを渡し、返ってきた副作用（タイマー、fetch、
//! ダウンロード、テーマ保存など）をブラウザAPIで実行する。
//! 描画用のスナップショットはシグナルに流す。

use call_analyzer_common::{Effect, FileMeta, Section, SelectedFile, Session, SessionView, Theme, UiEvent};
use gloo::timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use web_sys::{File, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::api::process_audio::process_audio;
use crate::export::download_text_file;
use crate::theme_store;

/// ブラウザ側のコントローラ（Copy でクロージャに渡せる）
#[derive(Clone, Copy)]
pub struct Controller {
    session: StoredValue<Session<File>, LocalStorage>,
    view: RwSignal<SessionView>,
    file_input: NodeRef<html::Input>,
}

impl Controller {
    pub fn new(theme: Theme) -> Self {
        let session = Session::new(theme);
        let view = RwSignal::new(session.view());
        Self {
            session: StoredValue::new_local(session),
            view,
            file_input: NodeRef::new(),
        }
    }

    /// 描画用スナップショット
    pub fn view(&self) -> RwSignal<SessionView> {
        self.view
    }

    /// 常に存在する非表示の `<input type="file">`
    pub fn file_input(&self) -> NodeRef<html::Input> {
        self.file_input
    }

    /// 起動時の副作用（テーマ適用）を実行
    pub fn start(self) {
        let effects = self
            .session
            .try_with_value(|s| s.startup_effects())
            .unwrap_or_default();
        self.run_effects(effects);
    }

    pub fn dispatch(self, event: UiEvent<File>) {
        let effects = self.apply(event);
        self.run_effects(effects);
    }

    /// キー入力は既定動作の抑止をその場で行う必要がある
    pub fn handle_key(self, ev: &KeyboardEvent) {
        let input = call_analyzer_common::KeyInput::new(ev.key(), ev.ctrl_key(), ev.meta_key());
        let effects = self.apply(UiEvent::KeyDown(input));
        if effects.iter().any(|e| matches!(e, Effect::PreventDefault)) {
            ev.prevent_default();
        }
        self.run_effects(effects);
    }

    fn apply(self, event: UiEvent<File>) -> Vec<Effect<File>> {
        let kind = event.kind();
        let Some((effects, view)) = self.session.try_update_value(|s| {
            let effects = s.dispatch(event);
            (effects, s.view())
        }) else {
            log::warn!("session disposed, dropping {:?}", kind);
            return Vec::new();
        };
        self.view.set(view);
        effects
    }

    fn run_effects(self, effects: Vec<Effect<File>>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(self, effect: Effect<File>) {
        match effect {
            Effect::OpenFilePicker => {
                if let Some(input) = self.file_input.get_untracked() {
                    input.click();
                }
            }
            Effect::ClearFileInput => {
                if let Some(input) = self.file_input.get_untracked() {
                    input.set_value("");
                }
            }
            // handle_key で処理済み
            Effect::PreventDefault => {}
            Effect::StartUpload { run, file } => {
                log::info!(
                    "run {}: uploading {} ({} bytes)",
                    run,
                    file.meta.name,
                    file.meta.size
                );
                wasm_bindgen_futures::spawn_local(async move {
                    let event = match process_audio(&file.handle).await {
                        Ok(result) => UiEvent::UploadSucceeded { run, result },
                        Err(message) => {
                            log::error!("run {}: upload failed: {}", run, message);
                            UiEvent::UploadFailed { run, message }
                        }
                    };
                    self.dispatch(event);
                });
            }
            Effect::Schedule { delay_ms, event } => {
                Timeout::new(delay_ms, move || self.dispatch(event)).forget();
            }
            Effect::Download(export) => {
                if let Err(e) = download_text_file(&export.file_name, &export.content) {
                    log::error!("download of {} failed: {}", export.file_name, e);
                }
            }
            Effect::ApplyTheme(theme) => theme_store::apply_theme(theme),
            Effect::PersistTheme(theme) => theme_store::save_theme(theme),
            Effect::ScrollIntoView(section) => {
                // セクションの描画を待ってからスクロール
                Timeout::new(0, move || scroll_into_view(section)).forget();
            }
        }
    }
}

/// ブラウザの File をセッションに渡す形にする
pub fn selected_file(file: File) -> SelectedFile<File> {
    let meta = FileMeta::new(file.name(), file.size() as u64, file.type_());
    SelectedFile::new(meta, file)
}

fn scroll_into_view(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.element_id()));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
