//! 管理画面HTTPクライアント

use crate::admin::response::{InstallOutcome, InstallResponse};
use crate::admin::url;
use crate::error::Result;
use reqwest::multipart::Form;
use reqwest::Client;

/// WordPress 管理画面クライアント
///
/// reqwest::Client 内包なので clone は安価。並行インストールは
/// clone したクライアントを個別タスクに渡して行う。
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    site_url: String,
}

impl AdminClient {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            site_url: site_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// プラグインを admin-ajax 経由でインストールする
    ///
    /// 固定エンドポイントへの multipart POST を1回だけ発行する。
    /// リトライ・タイムアウト・キャンセルは行わない。
    pub async fn install(&self, slug: &str, nonce: &str) -> Result<InstallOutcome> {
        let form = Form::new()
            .text("action", "install-plugin")
            .text("slug", slug.to_string())
            .text("_ajax_nonce", nonce.to_string());

        let response = self
            .http
            .post(url::ajax_url(&self.site_url))
            .header("User-Agent", "wpp-cli")
            .multipart(form)
            .send()
            .await?;

        // HTTPステータスに関わらず本文のJSONで成否を判断する
        // （admin-ajax はエラーでも success:false のJSONを返す）
        let body = response.text().await?;
        let parsed: InstallResponse = serde_json::from_str(&body)?;
        parsed.into_outcome()
    }

    /// 詳細ページ（埋め込みフレームの遷移先）を取得する
    pub async fn fetch_detail(&self, slug: &str) -> Result<String> {
        let response = self
            .http
            .get(url::detail_url(&self.site_url, slug))
            .header("User-Agent", "wpp-cli")
            .send()
            .await?;

        Ok(response.error_for_status()?.text().await?)
    }

    /// 正規化済みアクティベーションURLへ遷移する
    ///
    /// ブラウザのフルページナビゲーション相当。リダイレクトは
    /// reqwest のデフォルトポリシーで追従する。
    pub async fn navigate(&self, target: &str) -> Result<()> {
        self.http
            .get(target)
            .header("User-Agent", "wpp-cli")
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
