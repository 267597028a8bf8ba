//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm によるカタログブラウズ画面を提供する。

pub mod browser;
