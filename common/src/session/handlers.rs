//! 既定のイベントハンドラ群

use super::{DispatchTable, Effect, EventKind, Section, SelectedFile, SessionState, UiEvent};
use crate::export::{results_document, suggestions_document};
use crate::intake::validate_file;
use crate::keys::{shortcut_for, Shortcut};
use crate::notify::{Severity, ToastStage, TOAST_EXIT_MS};
use crate::progress::{step_delay_ms, PROCESSING_STEPS, REVEAL_DELAY_MS};
use crate::render::{render_results, SCORE_REVEAL_DELAY_MS};

const DOWNLOAD_SUCCESS_MESSAGE: &str = "File downloaded successfully!";

/// 全イベントのハンドラを登録したテーブル
pub(super) fn default_table<F: Clone>() -> DispatchTable<F> {
    let mut table = DispatchTable::new();
    table.register(EventKind::DragOver, on_drag_over::<F>);
    table.register(EventKind::DragLeave, on_drag_leave::<F>);
    table.register(EventKind::FileDropped, on_file_dropped::<F>);
    table.register(EventKind::FilePicked, on_file_picked::<F>);
    table.register(EventKind::DropZoneClicked, on_drop_zone_clicked::<F>);
    table.register(EventKind::RemoveFile, on_remove_file::<F>);
    table.register(EventKind::Submit, on_submit::<F>);
    table.register(EventKind::StepTick, on_step_tick::<F>);
    table.register(EventKind::UploadSucceeded, on_upload_succeeded::<F>);
    table.register(EventKind::UploadFailed, on_upload_failed::<F>);
    table.register(EventKind::RevealScores, on_reveal_scores::<F>);
    table.register(EventKind::RevealResults, on_reveal_results::<F>);
    table.register(EventKind::ToggleDetails, on_toggle_details::<F>);
    table.register(EventKind::AnalyzeAnother, on_analyze_another::<F>);
    table.register(EventKind::ExportResults, on_export_results::<F>);
    table.register(EventKind::ExportSuggestions, on_export_suggestions::<F>);
    table.register(EventKind::ToggleTheme, on_toggle_theme::<F>);
    table.register(EventKind::KeyDown, on_key_down::<F>);
    table.register(EventKind::ToastExpired, on_toast_expired::<F>);
    table.register(EventKind::ToastRemoved, on_toast_removed::<F>);
    table
}

// =============================================
// ファイル受付
// =============================================

fn on_drag_over<F>(state: &mut SessionState<F>, _: UiEvent<F>) -> Vec<Effect<F>> {
    state.drag_over = true;
    Vec::new()
}

fn on_drag_leave<F>(state: &mut SessionState<F>, _: UiEvent<F>) -> Vec<Effect<F>> {
    state.drag_over = false;
    Vec::new()
}

fn on_file_dropped<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::FileDropped(file) = event else {
        return Vec::new();
    };
    state.drag_over = false;
    match file {
        Some(file) => accept_file(state, file),
        None => Vec::new(),
    }
}

fn on_file_picked<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::FilePicked(file) = event else {
        return Vec::new();
    };
    accept_file(state, file)
}

/// 検証に通れば選択ファイルを置き換える。拒否時は通知のみ
fn accept_file<F>(state: &mut SessionState<F>, file: SelectedFile<F>) -> Vec<Effect<F>> {
    match validate_file(&file.meta) {
        Ok(()) => {
            state.selected = Some(file);
            Vec::new()
        }
        Err(e) => vec![state.push_toast(Severity::Error, e.to_string())],
    }
}

fn on_drop_zone_clicked<F>(_: &mut SessionState<F>, _: UiEvent<F>) -> Vec<Effect<F>> {
    vec![Effect::OpenFilePicker]
}

fn on_remove_file<F>(state: &mut SessionState<F>, _: UiEvent<F>) -> Vec<Effect<F>> {
    state.selected = None;
    vec![Effect::ClearFileInput]
}

// =============================================
// 送信と処理中表示
// =============================================

fn on_submit<F: Clone>(state: &mut SessionState<F>, _: UiEvent<F>) -> Vec<Effect<F>> {
    if !state.can_submit() {
        return Vec::new();
    }
    let Some(file) = state.selected.clone() else {
        return Vec::new();
    };

    state.is_processing = true;
    state.run_id += 1;
    state.section = Section::Processing;
    state.progress.reset();

    let run = state.run_id;
    let mut effects = vec![Effect::ScrollIntoView(Section::Processing)];
    effects.extend((0..PROCESSING_STEPS.len()).map(|index| Effect::Schedule {
        delay_ms: step_delay_ms(index),
        event: UiEvent::StepTick { run, index },
    }));
    effects.push(Effect::StartUpload { run, file });
    effects
}

fn on_step_tick<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::StepTick { run, index } = event else {
        return Vec::new();
    };
    if run == state.run_id {
        state.progress.advance(index);
    }
    Vec::new()
}

fn on_upload_succeeded<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::UploadSucceeded { run, result } = event else {
        return Vec::new();
    };
    if run != state.run_id {
        return Vec::new();
    }

    state.is_processing = false;
    state.results = Some(render_results(&result));
    state.scores_revealed = false;
    state.progress.complete();

    vec![
        Effect::Schedule {
            delay_ms: SCORE_REVEAL_DELAY_MS,
            event: UiEvent::RevealScores { run },
        },
        Effect::Schedule {
            delay_ms: REVEAL_DELAY_MS,
            event: UiEvent::RevealResults { run },
        },
    ]
}

fn on_upload_failed<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::UploadFailed { run, message } = event else {
        return Vec::new();
    };
    if run != state.run_id {
        return Vec::new();
    }

    state.is_processing = false;
    state.section = Section::Upload;
    vec![state.push_toast(Severity::Error, format!("Error: {}", message))]
}

fn on_reveal_scores<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::RevealScores { run } = event else {
        return Vec::new();
    };
    if run == state.run_id {
        state.scores_revealed = true;
    }
    Vec::new()
}

fn on_reveal_results<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::RevealResults { run } = event else {
        return Vec::new();
    };
    if run != state.run_id || state.section != Section::Processing {
        return Vec::new();
    }
    state.section = Section::Results;
    vec![Effect::ScrollIntoView(Section::Results)]
}

// =============================================
// 結果画面
// =============================================

fn on_toggle_details<F>(state: &mut SessionState<F>, _: UiEvent<F>) -> Vec<Effect<F>> {
    state.details_open = !state.details_open;
    Vec::new()
}

fn on_analyze_another<F>(state: &mut SessionState<F>, _: UiEvent<F>) -> Vec<Effect<F>> {
    state.section = Section::Upload;
    state.selected = None;
    state.details_open = false;
    vec![Effect::ClearFileInput, Effect::ScrollIntoView(Section::Upload)]
}

fn on_export_results<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::ExportResults { generated_at } = event else {
        return Vec::new();
    };
    let Some(results) = &state.results else {
        return Vec::new();
    };

    let document = results_document(
        &results.summary,
        &results.sentiment_text,
        &results.suggestions.text_content(),
        &generated_at,
    );
    vec![
        Effect::Download(document),
        state.push_toast(Severity::Success, DOWNLOAD_SUCCESS_MESSAGE),
    ]
}

fn on_export_suggestions<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::ExportSuggestions { generated_at } = event else {
        return Vec::new();
    };
    let Some(results) = &state.results else {
        return Vec::new();
    };

    let document = suggestions_document(&results.suggestions.text_content(), &generated_at);
    vec![
        Effect::Download(document),
        state.push_toast(Severity::Success, DOWNLOAD_SUCCESS_MESSAGE),
    ]
}

// =============================================
// テーマ・キーボード・通知
// =============================================

fn on_toggle_theme<F>(state: &mut SessionState<F>, _: UiEvent<F>) -> Vec<Effect<F>> {
    state.theme = state.theme.toggled();
    vec![Effect::ApplyTheme(state.theme), Effect::PersistTheme(state.theme)]
}

fn on_key_down<F: Clone>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::KeyDown(input) = event else {
        return Vec::new();
    };

    match shortcut_for(&input) {
        Some(Shortcut::OpenFilePicker) => {
            let mut effects = vec![Effect::PreventDefault];
            if !state.is_processing {
                effects.push(Effect::OpenFilePicker);
            }
            effects
        }
        Some(Shortcut::Submit) => {
            let mut effects = vec![Effect::PreventDefault];
            effects.extend(on_submit(state, UiEvent::Submit));
            effects
        }
        Some(Shortcut::Reset) if results_ready(state) => {
            on_analyze_another(state, UiEvent::AnalyzeAnother)
        }
        _ => Vec::new(),
    }
}

fn on_toast_expired<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::ToastExpired(id) = event else {
        return Vec::new();
    };
    let Some(toast) = state.toasts.iter_mut().find(|t| t.id == id) else {
        return Vec::new();
    };
    toast.stage = ToastStage::Leaving;
    vec![Effect::Schedule {
        delay_ms: TOAST_EXIT_MS,
        event: UiEvent::ToastRemoved(id),
    }]
}

fn on_toast_removed<F>(state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
    let UiEvent::ToastRemoved(id) = event else {
        return Vec::new();
    };
    state.toasts.retain(|t| t.id != id);
    Vec::new()
}

/// 結果画面、または解析完了後の表示待ち中か
///
/// 表示待ち中にリセットした場合、後から届く RevealResults は
/// セクションがProcessingでないため捨てられる
fn results_ready<F>(state: &SessionState<F>) -> bool {
    match state.section {
        Section::Results => true,
        Section::Processing => state.results.is_some() && !state.is_processing,
        _ => false,
    }
}
