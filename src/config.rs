use crate::error::{CallAnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 解析サーバーのデフォルトURL
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "CALL_ANALYZER_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            // 文字起こし込みで数分かかる
            timeout_seconds: 300,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CallAnalyzerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("call-analyzer").join("config.json"))
    }

    /// 使用するエンドポイント（環境変数を優先）
    pub fn endpoint(&self) -> String {
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.endpoint.clone(),
        }
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CallAnalyzerError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.endpoint = url;
        self.save()
    }
}
