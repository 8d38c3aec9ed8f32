//! 音声ファイルの受付チェック
//!
//! ドロップ/ファイル選択されたファイルの種別とサイズを検証する。
//! MIMEタイプが空や誤りのブラウザ向けに拡張子でもフォールバック判定する。

use crate::error::IntakeError;
use crate::types::FileMeta;

/// 受け付けるMIMEタイプ
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "audio/wav",
    "audio/mp3",
    "audio/mpeg",
    "audio/m4a",
    "audio/flac",
    "audio/ogg",
];

/// 受け付ける拡張子（小文字、ドット付き）
pub const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".m4a", ".flac", ".ogg", ".aac"];

/// 最大ファイルサイズ (100 MiB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// ファイル選択ダイアログの accept 属性
pub const ACCEPT_ATTRIBUTE: &str = "audio/*,.mp3,.wav,.m4a,.flac,.ogg,.aac";

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// ファイル名の拡張子が音声ファイルか判定（大文字小文字は無視）
pub fn is_audio_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    AUDIO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// 申告されたMIMEタイプが許可リストにあるか判定（完全一致）
pub fn is_allowed_mime_type(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

/// ファイルを検証する
///
/// 種別 → サイズの順にチェックし、最初に引っかかった理由を返す
pub fn validate_file(file: &FileMeta) -> Result<(), IntakeError> {
    if !is_allowed_mime_type(&file.mime_type) && !is_audio_file(&file.name) {
        return Err(IntakeError::UnsupportedType {
            file_name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        });
    }

    if file.size > MAX_FILE_SIZE {
        return Err(IntakeError::TooLarge {
            file_name: file.name.clone(),
            size: file.size,
        });
    }

    Ok(())
}

/// バイト数を読みやすい表記に変換
///
/// 1024単位、小数2桁（末尾の0は落とす）。GBより大きい値もGBで表示する。
///
/// # Examples
/// ```
/// use call_analyzer_common::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(&to_fixed(value, 2)), SIZE_UNITS[unit])
}

/// 小数`digits`桁の固定小数表記（端数の0.5は0から遠い側へ丸める）
///
/// `format!("{:.2}")` は偶数丸めなので、先に丸めてから整形する
pub(crate) fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits, (value * scale).round() / scale)
}

/// "1.50" → "1.5", "1.00" → "1"
fn trim_decimals(fixed: &str) -> &str {
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.')
}
