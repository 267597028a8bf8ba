//! 共有データストア
//!
//! ビューが所有する状態セルを一元管理する。変更は定義された遷移
//! （ペンディング追加/除去、成功応答の反映）だけを通して行う。

use crate::catalog::PluginRecord;
use std::collections::HashSet;

/// スラッグ（カタログ内で一意な安定ID）
pub type Slug = String;

/// 共有データストア
pub struct DataStore {
    /// カタログ順のプラグインレコード。成功したインストール応答でのみ書き換わる。
    pub plugins: Vec<PluginRecord>,
    /// インストール応答待ちのスラッグ集合
    pub pending: HashSet<Slug>,
    /// インストール用 nonce（呼び出し側から不透明な値として渡される）
    pub nonce: Option<String>,
}

impl DataStore {
    pub fn new(plugins: Vec<PluginRecord>, nonce: Option<String>) -> Self {
        Self {
            plugins,
            pending: HashSet::new(),
            nonce,
        }
    }

    /// スラッグでレコードを検索
    pub fn find_plugin(&self, slug: &str) -> Option<&PluginRecord> {
        self.plugins.iter().find(|p| p.slug == slug)
    }

    /// ペンディング集合へ追加（リクエスト開始時）
    pub fn mark_pending(&mut self, slug: &str) {
        self.pending.insert(slug.to_string());
    }

    /// ペンディング集合から除去。成功・失敗・例外を問わず必ず呼ばれる。
    pub fn clear_pending(&mut self, slug: &str) {
        self.pending.remove(slug);
    }

    pub fn is_pending(&self, slug: &str) -> bool {
        self.pending.contains(slug)
    }

    /// インストール成功を反映する
    ///
    /// 該当レコードの installed と activate_url だけを書き換え、
    /// 他のレコード・他のフィールドには触れない。
    pub fn apply_install_success(&mut self, slug: &str, activate_url: String) {
        if let Some(plugin) = self.plugins.iter_mut().find(|p| p.slug == slug) {
            plugin.installed = true;
            plugin.activate_url = Some(activate_url);
        }
    }
}

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;
