//! テキストファイルのダウンロード

pub mod download;

pub use download::{download_text_file, local_timestamp};
