//! トースト通知
//!
//! 5秒表示 → 0.3秒の退場アニメーション → 削除。複数同時に積み重なる。

/// 表示時間
pub const TOAST_VISIBLE_MS: u32 = 5000;

/// 退場アニメーション時間
pub const TOAST_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Font Awesome アイコン名
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
            Severity::Warning => "exclamation-triangle",
            Severity::Info => "info-circle",
        }
    }

    /// 背景色（CSS変数）
    pub fn accent(&self) -> &'static str {
        match self {
            Severity::Success => "var(--success)",
            Severity::Error => "var(--error)",
            Severity::Warning => "var(--warning)",
            Severity::Info => "var(--info)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStage {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub stage: ToastStage,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.severity.as_str())
    }

    pub fn icon_class(&self) -> String {
        format!("fas fa-{}", self.severity.icon())
    }

    pub fn style(&self) -> String {
        let animation = match self.stage {
            ToastStage::Visible => "slideInRight 0.3s ease-out",
            ToastStage::Leaving => "slideOutRight 0.3s ease-out",
        };
        format!("background: {}; animation: {}", self.severity.accent(), animation)
    }
}
