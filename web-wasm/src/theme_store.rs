//! テーマの保存と適用
//!
//! localStorage の `theme` キーに `light` / `dark` をそのまま保存し、
//! ルート要素の `data-theme` 属性に反映する。

use call_analyzer_common::theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use call_analyzer_common::Theme;
use gloo::storage::{LocalStorage, Storage};

/// 保存済みテーマを読み込む（未保存・不明値は light）
pub fn load_theme() -> Theme {
    let stored = LocalStorage::raw().get_item(THEME_STORAGE_KEY).ok().flatten();
    Theme::from_stored(stored.as_deref())
}

/// テーマを保存
pub fn save_theme(theme: Theme) {
    if LocalStorage::raw()
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .is_err()
    {
        log::warn!("failed to persist theme '{}'", theme.as_str());
    }
}

/// ルート要素にテーマ属性を設定
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if root.set_attribute(THEME_ATTRIBUTE, theme.as_str()).is_err() {
            log::warn!("failed to set {} attribute", THEME_ATTRIBUTE);
        }
    }
}

/// 現在ルート要素に設定されているテーマ属性
pub fn applied_theme() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
}
