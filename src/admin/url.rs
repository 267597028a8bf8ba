//! 管理画面URLの導出と正規化

/// アクティベーションURLを正規化する
///
/// HTMLエスケープされたアンパサンドはすべて戻し、"%2F" は最初の1箇所
/// だけを "/" に戻す（元実装の replaceAll / replace の対）。
pub fn normalize_activate_url(raw: &str) -> String {
    raw.replace("&amp;", "&").replacen("%2F", "/", 1)
}

/// admin-ajax エンドポイントのURL
pub fn ajax_url(site_url: &str) -> String {
    format!("{}/wp-admin/admin-ajax.php", site_url.trim_end_matches('/'))
}

/// プラグイン詳細ページ（埋め込みフレームの遷移先）のURL
///
/// サイトのオリジン＋固定の管理パス＋スラッグのクエリパラメータから
/// 決定的に導出される。
pub fn detail_url(site_url: &str, slug: &str) -> String {
    format!(
        "{}/wp-admin/plugin-install.php?tab=plugin-information&plugin={}",
        site_url.trim_end_matches('/'),
        slug
    )
}

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;
