//! 非同期アクションの実行
//!
//! update が返した Effect を tokio タスクとして実行し、完了を Msg で
//! イベントループへ届ける。一度送ったリクエストにキャンセル・タイム
//! アウト・リトライは無く、完了か失敗まで走りきる。

use super::core::{Effect, Msg};
use super::screens::overlay;
use crate::admin::AdminClient;
use crate::detail;
use tokio::sync::mpsc::UnboundedSender;

/// Effect を実行する。完了通知は tx 経由で届く。
pub fn perform(client: &AdminClient, effect: Effect, tx: &UnboundedSender<Msg>) {
    match effect {
        Effect::None => {}
        Effect::StartInstall { slug, nonce } => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                tracing::info!(slug = %slug, "install requested");
                let result = match client.install(&slug, &nonce).await {
                    Ok(outcome) => {
                        tracing::info!(slug = %slug, "install succeeded");
                        Ok(outcome)
                    }
                    Err(err) => {
                        tracing::error!(
                            slug = %slug,
                            error = %err,
                            transport = err.is_transport(),
                            "install failed"
                        );
                        Err(err.to_string())
                    }
                };
                // ビューが先に終了していた場合は捨ててよい
                let _ = tx.send(Msg::InstallFinished { slug, result });
            });
        }
        Effect::LoadDetail { slug } => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = match client.fetch_detail(&slug).await {
                    Ok(html) => Ok(detail::html_to_text(&html)),
                    Err(err) => {
                        tracing::warn!(slug = %slug, error = %err, "detail fetch failed");
                        Err(err.to_string())
                    }
                };
                let _ = tx.send(Msg::Overlay(overlay::Msg::Loaded { slug, result }));
            });
        }
    }
}
