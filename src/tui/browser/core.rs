//! コアモジュール
//!
//! ブラウズ TUI の基盤となる構造を提供する。
//!
//! - `app`: Model/Msg/Effect/update/view
//! - `data`: DataStore（共有データ）
//! - `common`: 共通 UI ユーティリティ

mod app;
mod common;
mod data;

pub use app::{update, view, Effect, Model, Msg};
pub use common::dialog_rect;
pub use data::{DataStore, Slug};
