//! 解析サーバーへのアップロード
//!
//! 音声ファイルを multipart/form-data の `audio_file` フィールドで
//! `{endpoint}/process_audio` に POST する。

use crate::error::{CallAnalyzerError, Result};
use call_analyzer_common::response::AUDIO_FIELD_NAME;
use call_analyzer_common::{endpoint_url, parse_process_response, AnalysisResult, SelectedFile};
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;
use std::time::Duration;

/// MIMEタイプが不明なときに送る値
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    url: String,
}

impl AnalysisClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: endpoint_url(endpoint),
        })
    }

    /// 送信先URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// ファイルを送信して解析結果を受け取る
    ///
    /// 2xx以外はボディの `error` をメッセージとするエラーになる
    pub async fn process_audio(&self, file: &SelectedFile<PathBuf>) -> Result<AnalysisResult> {
        let bytes = tokio::fs::read(&file.handle).await?;
        let mime_type = if file.meta.mime_type.is_empty() {
            FALLBACK_MIME_TYPE
        } else {
            file.meta.mime_type.as_str()
        };

        let part = Part::bytes(bytes)
            .file_name(file.meta.name.clone())
            .mime_str(mime_type)?;
        let form = Form::new().part(AUDIO_FIELD_NAME, part);

        tracing::debug!("POST {} ({} bytes)", self.url, file.meta.size);
        let resp = self.http.post(&self.url).multipart(form).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!("response status {}", status);

        parse_process_response(status.is_success(), &body).map_err(|e| match e {
            call_analyzer_common::Error::Server(message) => CallAnalyzerError::Server(message),
            other => other.into(),
        })
    }
}
