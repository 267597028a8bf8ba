//! 一覧画面の update（状態更新）

use super::model::{Model, Msg, UpdateEffect};
use crate::admin::normalize_activate_url;
use crate::catalog::Status;
use crate::tui::browser::core::DataStore;

/// メッセージに応じて状態を更新し、実行要求を返す
pub fn update(model: &mut Model, msg: Msg, data: &DataStore) -> UpdateEffect {
    match msg {
        Msg::Up => {
            select_prev(model, data);
            UpdateEffect::default()
        }
        Msg::Down => {
            select_next(model, data);
            UpdateEffect::default()
        }
        Msg::Action => action(model, data),
        Msg::Details => UpdateEffect {
            open_detail: model.selected_slug(data),
            ..UpdateEffect::default()
        },
    }
}

/// 選択を上に移動
fn select_prev(model: &mut Model, data: &DataStore) {
    if data.plugins.is_empty() {
        return;
    }
    let current = model.state.selected().unwrap_or(0);
    model.state.select(Some(current.saturating_sub(1)));
}

/// 選択を下に移動
fn select_next(model: &mut Model, data: &DataStore) {
    if data.plugins.is_empty() {
        return;
    }
    let current = model.state.selected().unwrap_or(0);
    let next = (current + 1).min(data.plugins.len().saturating_sub(1));
    model.state.select(Some(next));
}

/// プライマリアクションの実行要求を導出する
///
/// ペンディング中・アクティベート済みはコントロール無効。
/// activate はネットワークを使わず、正規化済みURLへのナビゲーション
/// 要求だけを返す（ビューから見ると終端アクション）。
fn action(model: &Model, data: &DataStore) -> UpdateEffect {
    let mut effect = UpdateEffect::default();
    let Some(slug) = model.selected_slug(data) else {
        return effect;
    };
    let Some(plugin) = data.find_plugin(&slug) else {
        return effect;
    };

    if data.is_pending(&slug) {
        return effect;
    }

    match Status::of(plugin) {
        Status::Activated => {}
        Status::ActivateNow => {
            if let Some(raw) = plugin.activate_url.as_deref() {
                effect.navigate = Some(normalize_activate_url(raw));
            }
        }
        Status::InstallNow => {
            effect.start_install = Some(slug);
        }
    }
    effect
}

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;
