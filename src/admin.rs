//! WordPress 管理画面エンドポイントとの通信
//!
//! - `client`: admin-ajax / 詳細ページ / ナビゲーション用のHTTPクライアント
//! - `response`: 緩い形のインストール応答をタグ付き結果へ変換
//! - `url`: URL導出とアクティベーションURLの正規化

mod client;
mod response;
mod url;

pub use client::AdminClient;
pub use response::{InstallOutcome, InstallResponse};
pub use url::{ajax_url, detail_url, normalize_activate_url};
