use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "call-analyzer")]
#[command(about = "通話音声を解析して要約・感情分析・提案を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 音声ファイルを送信して解析結果を表示
    Analyze {
        /// 音声ファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// テキスト出力 (results/suggestions/both)
        #[arg(short, long)]
        export: Option<ExportTarget>,

        /// 出力ディレクトリ（デフォルト: 設定値またはカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 解析サーバーのURL（設定・環境変数より優先）
        #[arg(long)]
        endpoint: Option<String>,

        /// プログレスバーを表示しない
        #[arg(long)]
        no_progress: bool,
    },

    /// 送信せずにファイルの受付チェックだけ行う
    Check {
        /// 音声ファイルのパス
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 解析サーバーのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 書き出すテキストファイル
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportTarget {
    Results,
    Suggestions,
    #[default]
    Both,
}

impl ExportTarget {
    pub fn includes_results(&self) -> bool {
        matches!(self, ExportTarget::Results | ExportTarget::Both)
    }

    pub fn includes_suggestions(&self) -> bool {
        matches!(self, ExportTarget::Suggestions | ExportTarget::Both)
    }
}

impl std::str::FromStr for ExportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "results" | "result" => Ok(ExportTarget::Results),
            "suggestions" | "suggestion" => Ok(ExportTarget::Suggestions),
            "both" => Ok(ExportTarget::Both),
            _ => Err(format!("Unknown export: {}. Use results, suggestions, or both", s)),
        }
    }
}
