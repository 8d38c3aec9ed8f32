//! ローカルの音声ファイルをセッションに渡す形にする

use crate::error::{CallAnalyzerError, Result};
use call_analyzer_common::{validate_file, FileMeta, SelectedFile};
use std::path::{Path, PathBuf};

/// 拡張子からMIMEタイプを推定（不明なら空文字）
pub fn mime_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/m4a",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("aac") => "audio/aac",
        _ => "",
    }
}

/// ファイルのメタ情報を読み取る（検証はしない）
pub fn inspect_file(path: &Path) -> Result<SelectedFile<PathBuf>> {
    if !path.is_file() {
        return Err(CallAnalyzerError::FileNotFound(path.display().to_string()));
    }

    let size = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = mime_type_for(&name);

    Ok(SelectedFile::new(
        FileMeta::new(name, size, mime_type),
        path.to_path_buf(),
    ))
}

/// 読み取りと受付チェックをまとめて行う
pub fn load_audio_file(path: &Path) -> Result<SelectedFile<PathBuf>> {
    let file = inspect_file(path)?;
    validate_file(&file.meta)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_for_known_extensions() {
        assert_eq!(mime_type_for("call.mp3"), "audio/mpeg");
        assert_eq!(mime_type_for("CALL.WAV"), "audio/wav");
        assert_eq!(mime_type_for("a.b.flac"), "audio/flac");
    }

    #[test]
    fn test_mime_type_for_unknown_extension() {
        assert_eq!(mime_type_for("notes.txt"), "");
        assert_eq!(mime_type_for("no_extension"), "");
    }

    #[test]
    fn test_inspect_missing_file() {
        let result = inspect_file(Path::new("/nonexistent/call-12345.mp3"));
        assert!(matches!(result, Err(CallAnalyzerError::FileNotFound(_))));
    }
}
