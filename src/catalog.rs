//! プラグインカタログ
//!
//! ホスト側から渡される初期レコード列（JSONファイル）の読み込みと、
//! レコードごとのステータスラベル導出を提供する。

use crate::error::{Result, WppError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// プラグインレコード（一覧1行分の表示・状態データ）
///
/// activated ⇒ installed を仮定するが、このモジュールでは強制しない。
/// ステータス導出の優先順位がその仮定を吸収する。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRecord {
    pub name: String,
    /// カタログ内で一意な安定ID
    pub slug: String,
    pub description: String,
    #[serde(rename = "logoURL")]
    pub logo_url: String,
    #[serde(rename = "docsURL")]
    pub docs_url: String,
    pub installed: bool,
    pub activated: bool,
    /// アクティベーション遷移先URL（エンコード済み文字を含みうる）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activate_url: Option<String>,
}

// ============================================================================
// Status（ステータスラベル導出）
// ============================================================================

/// レコードから導出されるコントロールの状態
///
/// 優先順位: activated > installed > 未導入。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// アクティベート済み（コントロールは常に無効）
    Activated,
    /// 導入済み・未アクティベート（クリックでナビゲーション）
    ActivateNow,
    /// 未導入（クリックでインストールリクエスト）
    InstallNow,
}

impl Status {
    /// レコードのフィールドだけからステータスを導出する
    pub fn of(record: &PluginRecord) -> Self {
        if record.activated {
            Status::Activated
        } else if record.installed {
            Status::ActivateNow
        } else {
            Status::InstallNow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Activated => "Activated",
            Status::ActivateNow => "Activate Now",
            Status::InstallNow => "Install Now",
        }
    }

    /// コントロールが操作可能かどうか（ペンディング中の無効化は別判定）
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Status::Activated)
    }
}

/// ペンディング中に表示するビジーラベル
///
/// 実際に飛んでいるアクションではなく installed だけから決まる。
/// 元実装の挙動をそのまま維持している。
pub fn busy_label(record: &PluginRecord) -> &'static str {
    if record.installed {
        "Activating..."
    } else {
        "Installing..."
    }
}

// ============================================================================
// Catalog（カタログファイル）
// ============================================================================

/// カタログ（順序つきレコード列）
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PluginRecord>,
}

impl Catalog {
    /// JSONファイルから読み込む。記載順を保持する。
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WppError::InvalidCatalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        let records: Vec<PluginRecord> = serde_json::from_str(&content).map_err(|e| {
            WppError::InvalidCatalog(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Self::from_records(records)
    }

    /// レコード列からカタログを構築する。スラッグ重複は拒否。
    pub fn from_records(records: Vec<PluginRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.slug.as_str()) {
                return Err(WppError::InvalidCatalog(format!(
                    "duplicate slug: {}",
                    record.slug
                )));
            }
        }
        Ok(Self { records })
    }

    /// スラッグでレコードを検索
    pub fn find(&self, slug: &str) -> Option<&PluginRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    pub fn records(&self) -> &[PluginRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PluginRecord> {
        self.records
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[cfg(test)]
#[path = "catalog_proptests.rs"]
mod catalog_proptests;
