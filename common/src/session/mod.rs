//! 画面セッション
//!
//! 選択ファイル・処理中フラグ・テーマ・表示セクションなど、画面の状態を
//! 一つの構造体にまとめて持つ。DOMには依存しない。
//!
//! ホスト（ブラウザ/CLI）は [`UiEvent`] を [`Session::dispatch`] に渡し、
//! 返ってきた [`Effect`] を実行する。タイマーや通信の結果はイベントとして
//! 再投入する。
//!
//! `F` はホスト側のファイルハンドル（`web_sys::File`、`PathBuf` など）。

pub mod dispatch;
mod handlers;

use crate::export::TextExport;
use crate::format_file_size;
use crate::keys::KeyInput;
use crate::notify::{Severity, Toast, ToastStage, TOAST_VISIBLE_MS};
use crate::progress::ProgressState;
use crate::render::RenderedResults;
use crate::theme::Theme;
use crate::types::{AnalysisResult, FileMeta};

pub use dispatch::{DispatchTable, Handler};

/// 表示中のセクション（常にどれか一つ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Upload,
    Processing,
    Results,
}

impl Section {
    pub fn element_id(&self) -> &'static str {
        match self {
            Section::Upload => "uploadSection",
            Section::Processing => "processingSection",
            Section::Results => "resultsSection",
        }
    }
}

/// 選択されたファイル
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub meta: FileMeta,
    pub handle: F,
}

impl<F> SelectedFile<F> {
    pub fn new(meta: FileMeta, handle: F) -> Self {
        Self { meta, handle }
    }
}

/// ホストから届くイベント
#[derive(Debug, Clone)]
pub enum UiEvent<F> {
    DragOver,
    DragLeave,
    /// ドロップ（ファイルが無いこともある）
    FileDropped(Option<SelectedFile<F>>),
    FilePicked(SelectedFile<F>),
    DropZoneClicked,
    RemoveFile,
    Submit,
    StepTick { run: u64, index: usize },
    UploadSucceeded { run: u64, result: AnalysisResult },
    UploadFailed { run: u64, message: String },
    RevealScores { run: u64 },
    RevealResults { run: u64 },
    ToggleDetails,
    AnalyzeAnother,
    ExportResults { generated_at: String },
    ExportSuggestions { generated_at: String },
    ToggleTheme,
    KeyDown(KeyInput),
    ToastExpired(u64),
    ToastRemoved(u64),
}

/// ディスパッチテーブルのキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DragOver,
    DragLeave,
    FileDropped,
    FilePicked,
    DropZoneClicked,
    RemoveFile,
    Submit,
    StepTick,
    UploadSucceeded,
    UploadFailed,
    RevealScores,
    RevealResults,
    ToggleDetails,
    AnalyzeAnother,
    ExportResults,
    ExportSuggestions,
    ToggleTheme,
    KeyDown,
    ToastExpired,
    ToastRemoved,
}

impl<F> UiEvent<F> {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::DragOver => EventKind::DragOver,
            UiEvent::DragLeave => EventKind::DragLeave,
            UiEvent::FileDropped(_) => EventKind::FileDropped,
            UiEvent::FilePicked(_) => EventKind::FilePicked,
            UiEvent::DropZoneClicked => EventKind::DropZoneClicked,
            UiEvent::RemoveFile => EventKind::RemoveFile,
            UiEvent::Submit => EventKind::Submit,
            UiEvent::StepTick { .. } => EventKind::StepTick,
            UiEvent::UploadSucceeded { .. } => EventKind::UploadSucceeded,
            UiEvent::UploadFailed { .. } => EventKind::UploadFailed,
            UiEvent::RevealScores { .. } => EventKind::RevealScores,
            UiEvent::RevealResults { .. } => EventKind::RevealResults,
            UiEvent::ToggleDetails => EventKind::ToggleDetails,
            UiEvent::AnalyzeAnother => EventKind::AnalyzeAnother,
            UiEvent::ExportResults { .. } => EventKind::ExportResults,
            UiEvent::ExportSuggestions { .. } => EventKind::ExportSuggestions,
            UiEvent::ToggleTheme => EventKind::ToggleTheme,
            UiEvent::KeyDown(_) => EventKind::KeyDown,
            UiEvent::ToastExpired(_) => EventKind::ToastExpired,
            UiEvent::ToastRemoved(_) => EventKind::ToastRemoved,
        }
    }
}

/// ホストに実行してもらう副作用
#[derive(Debug, Clone)]
pub enum Effect<F> {
    OpenFilePicker,
    ClearFileInput,
    /// キーイベントの既定動作を抑止
    PreventDefault,
    /// `/process_audio` へ送信し、結果を同じ run で返す
    StartUpload { run: u64, file: SelectedFile<F> },
    /// delay_ms 後に event を投入（キャンセルはしない）
    Schedule { delay_ms: u32, event: UiEvent<F> },
    Download(TextExport),
    ApplyTheme(Theme),
    PersistTheme(Theme),
    ScrollIntoView(Section),
}

/// 画面状態
#[derive(Debug, Clone)]
pub struct SessionState<F> {
    pub selected: Option<SelectedFile<F>>,
    pub is_processing: bool,
    pub theme: Theme,
    pub section: Section,
    pub drag_over: bool,
    /// 送信ごとに増える番号。古いタイマー/通信の結果を捨てるのに使う
    pub run_id: u64,
    pub progress: ProgressState,
    pub results: Option<RenderedResults>,
    pub scores_revealed: bool,
    pub details_open: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl<F> SessionState<F> {
    pub fn new(theme: Theme) -> Self {
        Self {
            selected: None,
            is_processing: false,
            theme,
            section: Section::Upload,
            drag_over: false,
            run_id: 0,
            progress: ProgressState::default(),
            results: None,
            scores_revealed: false,
            details_open: false,
            toasts: Vec::new(),
            next_toast_id: 1,
        }
    }

    /// 送信ボタンが押せるか
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_processing
    }

    /// トーストを積み、自動消去のタイマーを返す
    pub(crate) fn push_toast(&mut self, severity: Severity, message: impl Into<String>) -> Effect<F> {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            severity,
            message: message.into(),
            stage: ToastStage::Visible,
        });
        Effect::Schedule {
            delay_ms: TOAST_VISIBLE_MS,
            event: UiEvent::ToastExpired(id),
        }
    }

    /// ファイルハンドルを除いた表示用スナップショット
    pub fn view(&self) -> SessionView {
        SessionView {
            selected: self.selected.as_ref().map(|f| f.meta.clone()),
            can_submit: self.can_submit(),
            is_processing: self.is_processing,
            theme: self.theme,
            section: self.section,
            drag_over: self.drag_over,
            progress: self.progress.clone(),
            results: self.results.clone(),
            scores_revealed: self.scores_revealed,
            details_open: self.details_open,
            toasts: self.toasts.clone(),
        }
    }
}

/// 描画用のスナップショット（Send + Sync、比較可能）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionView {
    pub selected: Option<FileMeta>,
    pub can_submit: bool,
    pub is_processing: bool,
    pub theme: Theme,
    pub section: Section,
    pub drag_over: bool,
    pub progress: ProgressState,
    pub results: Option<RenderedResults>,
    pub scores_revealed: bool,
    pub details_open: bool,
    pub toasts: Vec<Toast>,
}

impl SessionView {
    pub fn file_name(&self) -> String {
        self.selected.as_ref().map(|f| f.name.clone()).unwrap_or_default()
    }

    pub fn file_size(&self) -> String {
        self.selected
            .as_ref()
            .map(|f| format_file_size(f.size))
            .unwrap_or_default()
    }
}

/// 状態とディスパッチテーブルを持つセッション
pub struct Session<F> {
    state: SessionState<F>,
    table: DispatchTable<F>,
}

impl<F: Clone> Session<F> {
    pub fn new(theme: Theme) -> Self {
        Self {
            state: SessionState::new(theme),
            table: handlers::default_table(),
        }
    }

    pub fn state(&self) -> &SessionState<F> {
        &self.state
    }

    pub fn view(&self) -> SessionView {
        self.state.view()
    }

    /// 起動時に実行する副作用（保存済みテーマの適用）
    pub fn startup_effects(&self) -> Vec<Effect<F>> {
        vec![Effect::ApplyTheme(self.state.theme)]
    }

    /// イベントを登録済みハンドラに渡す
    pub fn dispatch(&mut self, event: UiEvent<F>) -> Vec<Effect<F>> {
        self.table.dispatch(&mut self.state, event)
    }

    /// ハンドラを差し替える（以前のハンドラを返す）
    pub fn register(&mut self, kind: EventKind, handler: Handler<F>) -> Option<Handler<F>> {
        self.table.register(kind, handler)
    }
}
