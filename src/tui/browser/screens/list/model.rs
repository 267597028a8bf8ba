//! 一覧画面の Model/Msg 定義

use crate::tui::browser::core::{DataStore, Slug};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Model（画面状態）
// ============================================================================

/// 一覧画面の状態
///
/// レコードの並び替え・絞り込み・削除は無いので、選択はインデックス
/// だけで安定して追跡できる。
pub struct Model {
    pub state: ListState,
}

impl Model {
    /// 新しいモデルを作成
    pub fn new(data: &DataStore) -> Self {
        let mut state = ListState::default();
        if !data.plugins.is_empty() {
            state.select(Some(0));
        }
        Self { state }
    }

    /// 選択中レコードのスラッグを取得
    pub fn selected_slug(&self, data: &DataStore) -> Option<Slug> {
        let idx = self.state.selected()?;
        data.plugins.get(idx).map(|p| p.slug.clone())
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// 一覧画面へのメッセージ
pub enum Msg {
    Up,
    Down,
    /// プライマリアクション（ステータスに応じて install / activate）
    Action,
    /// 詳細オーバーレイを開く（タイトル/More Details 相当）
    Details,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Enter => Some(Msg::Action),
        KeyCode::Char('d') => Some(Msg::Details),
        _ => None,
    }
}

// ============================================================================
// UpdateEffect（update の戻り値）
// ============================================================================

/// list::update() の戻り値
///
/// 画面自身は副作用を起こさず、要求だけを返す。
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateEffect {
    /// インストールを開始すべきスラッグ
    pub start_install: Option<Slug>,
    /// 詳細オーバーレイを開くべきスラッグ
    pub open_detail: Option<Slug>,
    /// ナビゲーションして終了すべきURL（正規化済み）
    pub navigate: Option<String>,
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;
