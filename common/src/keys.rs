//! キーボードショートカット
//!
//! - Ctrl/Cmd + U: ファイル選択を開く
//! - Ctrl/Cmd + Enter: 解析開始
//! - Escape: 結果画面からリセット

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyInput {
    /// `KeyboardEvent.key` の値
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool, meta: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            meta,
        }
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    OpenFilePicker,
    Submit,
    Reset,
}

/// キー入力をショートカットに変換
pub fn shortcut_for(input: &KeyInput) -> Option<Shortcut> {
    if input.command() && input.key.eq_ignore_ascii_case("u") {
        return Some(Shortcut::OpenFilePicker);
    }
    if input.command() && input.key == "Enter" {
        return Some(Shortcut::Submit);
    }
    if input.key == "Escape" {
        return Some(Shortcut::Reset);
    }
    None
}
