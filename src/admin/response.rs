//! インストール応答の変換
//!
//! admin-ajax の応答は `{success, data?: {activateUrl?, message?}}` という
//! 緩い形で届く。未定義フィールドを伝播させず、タグ付き結果へ閉じて変換する。

use crate::error::{Result, WppError};
use serde::Deserialize;

/// success:false でメッセージが無いときの汎用フォールバック
const FALLBACK_MESSAGE: &str = "Failed to install plugin";

/// インストール応答（デシリアライズ直後の緩い形）
#[derive(Debug, Clone, Deserialize)]
pub struct InstallResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<InstallData>,
}

/// 応答の data 部。フィールドはどちらも省略されうる。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstallData {
    #[serde(default, rename = "activateUrl")]
    pub activate_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 検証済みのインストール成功結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// 以後のアクティベーションに使う遷移先URL（未正規化のまま保持）
    pub activate_url: String,
}

impl InstallResponse {
    /// タグ付き結果へ変換する
    ///
    /// - success かつ activateUrl あり → 成功
    /// - success だが activateUrl なし → MalformedResponse（トランスポート扱い）
    /// - success:false → InstallRejected（サーバーのメッセージまたはフォールバック）
    pub fn into_outcome(self) -> Result<InstallOutcome> {
        if !self.success {
            let message = self
                .data
                .and_then(|d| d.message)
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            return Err(WppError::InstallRejected(message));
        }

        match self.data.and_then(|d| d.activate_url) {
            Some(activate_url) => Ok(InstallOutcome { activate_url }),
            None => Err(WppError::MalformedResponse(
                "success response without activateUrl".to_string(),
            )),
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
