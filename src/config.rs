//! 実行時設定
//!
//! 設定ファイル（~/.wpp/config.toml）・環境変数（WPP_*）・CLIフラグの
//! 3段階で解決する。優先順位はフラグ > 環境変数 > ファイル。

use crate::error::{Result, WppError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// config.toml のルート構造
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub site_url: Option<String>,
    pub nonce: Option<String>,
    pub catalog: Option<PathBuf>,
}

impl ConfigFile {
    /// デフォルトパス（~/.wpp/config.toml）から読み込む。ファイルがなければ空。
    pub fn load() -> Result<Self> {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| WppError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// 解決済みのサイト設定
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// サイトのベースURL（末尾スラッシュなしに正規化済み）
    pub site_url: String,
    /// インストール用のCSRFトークン。不透明な値としてそのまま送る。
    pub nonce: Option<String>,
    /// カタログJSONのパス
    pub catalog: PathBuf,
}

impl SiteConfig {
    /// 設定ファイル＋環境変数＋フラグから解決する
    pub fn resolve(
        site: Option<&str>,
        nonce: Option<&str>,
        catalog: Option<&Path>,
    ) -> Result<Self> {
        let file = ConfigFile::load()?;
        Self::from_sources(file, site, nonce, catalog)
    }

    fn from_sources(
        file: ConfigFile,
        site: Option<&str>,
        nonce: Option<&str>,
        catalog: Option<&Path>,
    ) -> Result<Self> {
        let site_url = site
            .map(str::to_string)
            .or_else(|| env_var("WPP_SITE_URL"))
            .or(file.site_url)
            .ok_or_else(|| {
                WppError::Config(
                    "site URL not set (use --site, WPP_SITE_URL, or config.toml)".to_string(),
                )
            })?;

        let nonce = nonce
            .map(str::to_string)
            .or_else(|| env_var("WPP_NONCE"))
            .or(file.nonce);

        let catalog = catalog
            .map(Path::to_path_buf)
            .or_else(|| env_var("WPP_CATALOG").map(PathBuf::from))
            .or(file.catalog)
            .ok_or_else(|| {
                WppError::Config(
                    "catalog path not set (use --catalog, WPP_CATALOG, or config.toml)".to_string(),
                )
            })?;

        Ok(Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            nonce,
            catalog,
        })
    }

    /// インストール系コマンドが要求する nonce を取得
    pub fn require_nonce(&self) -> Result<&str> {
        self.nonce.as_deref().ok_or_else(|| {
            WppError::Config("install nonce not set (use --nonce, WPP_NONCE, or config.toml)".to_string())
        })
    }
}

fn default_path() -> Option<PathBuf> {
    let home = env_var("HOME")?;
    Some(PathBuf::from(home).join(".wpp").join("config.toml"))
}

/// 環境変数を取得（空文字列はNoneとして扱う）
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
