//! 画面モジュール
//!
//! - `list`: カタログ一覧
//! - `overlay`: 詳細オーバーレイ（埋め込みフレーム相当のモーダル）

pub mod list;
pub mod overlay;
