//! Call Analyzer CLI
//!
//! 共通ライブラリのセッションをターミナル上で動かす

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod runner;
