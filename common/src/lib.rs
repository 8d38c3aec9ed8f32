//! Call Analyzer Common Library
//!
//! ブラウザ(WASM)とCLIで共有される画面ロジックと型

pub mod types;
pub mod error;
pub mod intake;
pub mod response;
pub mod render;
pub mod progress;
pub mod export;
pub mod theme;
pub mod notify;
pub mod keys;
pub mod session;

pub use types::{AnalysisResult, FileMeta, SentimentPayload, VaderScores};
pub use error::{Error, IntakeError, Result};
pub use intake::{format_file_size, is_audio_file, validate_file, MAX_FILE_SIZE};
pub use response::{endpoint_url, parse_process_response};
pub use render::{render_results, RenderedResults, SuggestionsView};
pub use export::TextExport;
pub use theme::Theme;
pub use keys::KeyInput;
pub use session::{Effect, EventKind, Section, SelectedFile, Session, SessionView, UiEvent};
