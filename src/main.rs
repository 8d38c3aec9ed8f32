use anyhow::Context;
use call_analyzer::{cli, client, config, input, report, runner};
use call_analyzer_common::format_file_size;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Analyze { file, export, output, endpoint, no_progress } => {
            println!("🎧 call-analyzer - 通話解析\n");

            // 1. ファイルチェック
            println!("[1/3] ファイルを確認中...");
            let audio = input::load_audio_file(&file)?;
            println!(
                "✔ {} ({})\n",
                audio.meta.name,
                format_file_size(audio.meta.size)
            );

            // 2. 送信・解析
            let endpoint = endpoint.unwrap_or_else(|| config.endpoint());
            let client = client::AnalysisClient::new(
                &endpoint,
                Duration::from_secs(config.timeout_seconds),
            )?;
            println!("[2/3] 解析中... ({})", client.url());

            let output_dir = output
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let options = runner::RunOptions {
                export,
                output_dir,
                show_progress: !no_progress,
            };
            let outcome = runner::run_analysis(&client, audio, &options).await?;
            println!("✔ 解析完了\n");

            // 3. 結果表示
            println!("[3/3] 結果");
            println!("{}", report::format_report(&outcome.results));

            for path in &outcome.written {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Check { file } => {
            let audio = input::load_audio_file(&file)?;
            println!(
                "✔ {} ({}, {})",
                audio.meta.name,
                format_file_size(audio.meta.size),
                if audio.meta.mime_type.is_empty() { "unknown type" } else { audio.meta.mime_type.as_str() }
            );
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                println!("✔ エンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  出力先: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "カレントディレクトリ".into())
                );
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
