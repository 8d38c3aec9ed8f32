//! ローカルファイルの受付チェックテスト

use call_analyzer::error::CallAnalyzerError;
use call_analyzer::input::{inspect_file, load_audio_file};
use call_analyzer_common::{IntakeError, MAX_FILE_SIZE};
use std::fs::File;
use tempfile::tempdir;

/// 音声ファイルはメタ情報付きで受け付ける
#[test]
fn test_accepts_audio_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("Session-01.MP3");
    std::fs::write(&path, vec![0u8; 1536]).expect("ファイル作成失敗");

    let file = load_audio_file(&path).expect("受け付けるべき");
    assert_eq!(file.meta.name, "Session-01.MP3");
    assert_eq!(file.meta.size, 1536);
    assert_eq!(file.meta.mime_type, "audio/mpeg");
    assert_eq!(file.handle, path);
}

/// 拡張子でAACも受け付ける（MIMEは許可リスト外）
#[test]
fn test_accepts_aac_by_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("call.aac");
    std::fs::write(&path, b"aac").expect("ファイル作成失敗");

    let file = load_audio_file(&path).expect("受け付けるべき");
    assert_eq!(file.meta.mime_type, "audio/aac");
}

/// 音声以外は種別エラー
#[test]
fn test_rejects_non_audio() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("transcript.pdf");
    std::fs::write(&path, b"%PDF").expect("ファイル作成失敗");

    let result = load_audio_file(&path);
    assert!(matches!(
        result,
        Err(CallAnalyzerError::Intake(IntakeError::UnsupportedType { .. }))
    ));
}

/// 100MBを超えるとサイズエラー（スパースファイルで作成）
#[test]
fn test_rejects_oversized_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("long-call.wav");
    let file = File::create(&path).expect("ファイル作成失敗");
    file.set_len(MAX_FILE_SIZE + 1).expect("サイズ設定失敗");

    let result = load_audio_file(&path);
    assert!(matches!(
        result,
        Err(CallAnalyzerError::Intake(IntakeError::TooLarge { .. }))
    ));
}

/// ちょうど100MBは受け付ける
#[test]
fn test_accepts_exact_limit() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("limit.flac");
    let file = File::create(&path).expect("ファイル作成失敗");
    file.set_len(MAX_FILE_SIZE).expect("サイズ設定失敗");

    assert!(load_audio_file(&path).is_ok());
}

/// inspect_file は検証しない
#[test]
fn test_inspect_does_not_validate() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").expect("ファイル作成失敗");

    let file = inspect_file(&path).expect("読み取り失敗");
    assert_eq!(file.meta.mime_type, "");
    assert_eq!(file.meta.size, 5);
}
