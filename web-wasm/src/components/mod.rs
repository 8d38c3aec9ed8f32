//! UIコンポーネント

pub mod export_buttons;
pub mod header;
pub mod notifications;
pub mod progress_bar;
pub mod results_panel;
pub mod upload_area;
