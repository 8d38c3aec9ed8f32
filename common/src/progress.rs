//! 処理中画面のステップ表示
//!
//! 実際のサーバー処理とは同期しない固定タイムライン。
//! 1秒ごとに4ステップ進み、25/50/75/100%を表示する。

/// ステップ間隔
pub const STEP_INTERVAL_MS: u32 = 1000;

/// 完了後に結果画面へ切り替えるまでの遅延
pub const REVEAL_DELAY_MS: u32 = 1000;

pub const PREPARING_STATUS: &str = "Preparing analysis...";
pub const COMPLETE_STATUS: &str = "Analysis complete!";

/// タイムラインの1ステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStep {
    pub title: &'static str,
    pub status: &'static str,
    pub progress: u8,
}

pub const PROCESSING_STEPS: [ProcessingStep; 4] = [
    ProcessingStep { title: "Upload", status: "Uploading file...", progress: 25 },
    ProcessingStep { title: "Transcribe", status: "Transcribing audio...", progress: 50 },
    ProcessingStep { title: "Sentiment", status: "Analyzing sentiment...", progress: 75 },
    ProcessingStep { title: "Insights", status: "Generating insights...", progress: 100 },
];

/// ステップ i の発火タイミング
pub fn step_delay_ms(index: usize) -> u32 {
    index as u32 * STEP_INTERVAL_MS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepState {
    #[default]
    Pending,
    Active,
    Completed,
}

impl StepState {
    pub fn css_class(&self) -> &'static str {
        match self {
            StepState::Pending => "step",
            StepState::Active => "step active",
            StepState::Completed => "step completed",
        }
    }
}

/// 処理中画面の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    pub steps: [StepState; 4],
    pub percent: u8,
    pub status: String,
    /// レスポンス受信済み（以降のステップ更新は無視）
    pub completed: bool,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            steps: [StepState::Pending; 4],
            percent: 0,
            status: PREPARING_STATUS.to_string(),
            completed: false,
        }
    }
}

impl ProgressState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// ステップ index に進める
    ///
    /// 前のステップは完了、当該ステップはアクティブになる。
    /// 範囲外や完了後の呼び出しは何もしない。
    pub fn advance(&mut self, index: usize) {
        if self.completed {
            return;
        }
        let Some(step) = PROCESSING_STEPS.get(index) else {
            return;
        };

        for prev in self.steps.iter_mut().take(index) {
            *prev = StepState::Completed;
        }
        self.steps[index] = StepState::Active;
        self.percent = step.progress;
        self.status = step.status.to_string();
    }

    /// 全ステップ完了
    pub fn complete(&mut self) {
        self.steps = [StepState::Completed; 4];
        self.status = COMPLETE_STATUS.to_string();
        self.completed = true;
    }

    pub fn width_style(&self) -> String {
        format!("width: {}%", self.percent)
    }
}
