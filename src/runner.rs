//! セッションをターミナル上で動かすイベントループ
//!
//! セッションが返す副作用のうち、タイマーとアップロードは tokio タスクで実行し、
//! 結果をチャネル経由でセッションに戻す。ダウンロードは出力ディレクトリへの
//! 書き込みになる。画面操作系の副作用は無視する。

use crate::cli::ExportTarget;
use crate::client::AnalysisClient;
use crate::error::{CallAnalyzerError, Result};
use crate::report::format_toast;
use call_analyzer_common::progress::COMPLETE_STATUS;
use call_analyzer_common::response::DEFAULT_FAILURE_MESSAGE;
use call_analyzer_common::{
    validate_file, Effect, RenderedResults, Section, SelectedFile, Session, Theme, UiEvent,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// 完了後に書き出すテキスト
    pub export: Option<ExportTarget>,
    pub output_dir: PathBuf,
    pub show_progress: bool,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub results: RenderedResults,
    /// 書き出したファイル
    pub written: Vec<PathBuf>,
}

/// エクスポートに埋め込むローカル日時
pub fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// ファイルを1件解析する
pub async fn run_analysis(
    client: &AnalysisClient,
    file: SelectedFile<PathBuf>,
    options: &RunOptions,
) -> Result<RunOutcome> {
    validate_file(&file.meta)?;
    Runner::new(client.clone(), options).run(file).await
}

struct Runner<'a> {
    session: Session<PathBuf>,
    client: AnalysisClient,
    options: &'a RunOptions,
    tx: UnboundedSender<UiEvent<PathBuf>>,
    rx: UnboundedReceiver<UiEvent<PathBuf>>,
    bar: ProgressBar,
    printed_toasts: HashSet<u64>,
    written: Vec<PathBuf>,
}

impl<'a> Runner<'a> {
    fn new(client: AnalysisClient, options: &'a RunOptions) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            session: Session::new(Theme::default()),
            client,
            options,
            tx,
            rx,
            bar: progress_bar(options.show_progress),
            printed_toasts: HashSet::new(),
            written: Vec::new(),
        }
    }

    async fn run(mut self, file: SelectedFile<PathBuf>) -> Result<RunOutcome> {
        self.dispatch(UiEvent::FilePicked(file)).await?;
        self.dispatch(UiEvent::Submit).await?;

        let mut failure = None;
        while let Some(event) = self.rx.recv().await {
            if let UiEvent::UploadFailed { message, .. } = &event {
                failure = Some(message.clone());
            }
            self.dispatch(event).await?;

            let state = self.session.state();
            match state.section {
                Section::Results => break,
                Section::Upload if !state.is_processing => {
                    self.bar.abandon();
                    let message = failure.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                    return Err(CallAnalyzerError::Server(message));
                }
                _ => {}
            }
        }
        self.bar.finish_with_message(COMPLETE_STATUS);

        if let Some(target) = self.options.export {
            let generated_at = local_timestamp();
            if target.includes_results() {
                self.dispatch(UiEvent::ExportResults {
                    generated_at: generated_at.clone(),
                })
                .await?;
            }
            if target.includes_suggestions() {
                self.dispatch(UiEvent::ExportSuggestions { generated_at }).await?;
            }
        }

        let results = self
            .session
            .state()
            .results
            .clone()
            .ok_or_else(|| CallAnalyzerError::Server(DEFAULT_FAILURE_MESSAGE.to_string()))?;

        Ok(RunOutcome {
            results,
            written: self.written,
        })
    }

    async fn dispatch(&mut self, event: UiEvent<PathBuf>) -> Result<()> {
        let effects = self.session.dispatch(event);
        self.sync_progress();
        self.print_new_toasts();

        for effect in effects {
            self.run_effect(effect).await?;
        }
        Ok(())
    }

    async fn run_effect(&mut self, effect: Effect<PathBuf>) -> Result<()> {
        match effect {
            Effect::StartUpload { run, file } => {
                tracing::info!("run {}: uploading {} to {}", run, file.meta.name, self.client.url());
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let event = match client.process_audio(&file).await {
                        Ok(result) => UiEvent::UploadSucceeded { run, result },
                        Err(e) => {
                            tracing::warn!("run {}: upload failed: {}", run, e);
                            UiEvent::UploadFailed {
                                run,
                                message: failure_message(e),
                            }
                        }
                    };
                    let _ = tx.send(event);
                });
            }
            Effect::Schedule { delay_ms, event } => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms.into())).await;
                    let _ = tx.send(event);
                });
            }
            Effect::Download(export) => {
                tokio::fs::create_dir_all(&self.options.output_dir).await?;
                let path = self.options.output_dir.join(&export.file_name);
                tokio::fs::write(&path, &export.content).await?;
                tracing::info!("wrote {}", path.display());
                self.written.push(path);
            }
            other => tracing::debug!("ignored effect: {:?}", other),
        }
        Ok(())
    }

    fn sync_progress(&self) {
        let progress = &self.session.state().progress;
        self.bar.set_position(progress.percent as u64);
        self.bar.set_message(progress.status.clone());
    }

    fn print_new_toasts(&mut self) {
        let toasts = &self.session.state().toasts;
        for toast in toasts {
            if self.printed_toasts.insert(toast.id) {
                self.bar.suspend(|| println!("{}", format_toast(toast)));
            }
        }
    }
}

/// トーストに出すメッセージ（サーバーのメッセージはそのまま）
fn failure_message(error: CallAnalyzerError) -> String {
    match error {
        CallAnalyzerError::Server(message) => message,
        other => other.to_string(),
    }
}

fn progress_bar(show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_keeps_server_text() {
        let message = failure_message(CallAnalyzerError::Server("Transcription failed".into()));
        assert_eq!(message, "Transcription failed");
    }

    #[test]
    fn test_failure_message_formats_other_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let message = failure_message(CallAnalyzerError::Io(io));
        assert!(message.contains("disk"));
    }

    #[test]
    fn test_local_timestamp_is_not_empty() {
        let stamp = local_timestamp();
        assert!(stamp.contains(", "));
        assert!(stamp.ends_with("AM") || stamp.ends_with("PM"));
    }
}
