//! ブラウズ TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: アプリケーション全体の状態（データ + 一覧 + オーバーレイ + 通知）
//! - `Msg`: アプリケーションへのメッセージ
//! - `Effect`: update が要求する非同期作業（実行は dispatch が担う）

use super::data::DataStore;
use crate::admin::InstallOutcome;
use crate::catalog::PluginRecord;
use crate::tui::browser::screens::{list, overlay};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
pub enum Msg {
    /// 生のキー入力（モデルの状態に応じて変換される）
    Key(KeyCode),
    /// 終了
    Quit,
    /// 一覧画面のメッセージ
    List(list::Msg),
    /// オーバーレイのメッセージ
    Overlay(overlay::Msg),
    /// インストール完了。成功・失敗を問わずペンディング解除を伴う。
    InstallFinished {
        slug: String,
        result: Result<InstallOutcome, String>,
    },
    /// エラー通知を閉じる
    DismissNotice,
}

// ============================================================================
// Effect（非同期作業の要求）
// ============================================================================

/// update が要求する非同期作業
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// インストールリクエストを開始する（該当スラッグはペンディング済み）
    StartInstall { slug: String, nonce: String },
    /// 詳細ページの取得を開始する（埋め込みフレームのロード相当）
    LoadDetail { slug: String },
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// 共有データストア
    pub data: DataStore,
    /// 一覧画面の状態
    pub list: list::Model,
    /// 詳細オーバーレイ（開いているときのみ Some、同時に1つまで）
    pub overlay: Option<overlay::Model>,
    /// ブロッキングエラー通知。表示中は閉じる操作以外を受け付けない。
    pub notice: Option<String>,
    /// ビュー終了後に辿るナビゲーション先（activate は終端アクション）
    pub navigation: Option<String>,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// 新しいモデルを作成
    pub fn new(plugins: Vec<PluginRecord>, nonce: Option<String>) -> Self {
        let data = DataStore::new(plugins, nonce);
        let list = list::Model::new(&data);
        Self {
            data,
            list,
            overlay: None,
            notice: None,
            navigation: None,
            should_quit: false,
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        // ブロッキング通知の表示中は閉じる操作だけを受け付ける
        if self.notice.is_some() {
            return match key {
                KeyCode::Enter | KeyCode::Esc => Some(Msg::DismissNotice),
                _ => None,
            };
        }

        // オーバーレイ表示中はオーバーレイが入力を取る
        if self.overlay.is_some() {
            return overlay::key_to_msg(key).map(Msg::Overlay);
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
            _ => list::key_to_msg(key).map(Msg::List),
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新し、必要な非同期作業を返す
pub fn update(model: &mut Model, msg: Msg) -> Effect {
    match msg {
        Msg::Key(key) => match model.key_to_msg(key) {
            Some(msg) => update(model, msg),
            None => Effect::None,
        },
        Msg::Quit => {
            model.should_quit = true;
            Effect::None
        }
        Msg::DismissNotice => {
            model.notice = None;
            Effect::None
        }
        Msg::List(msg) => {
            let effect = list::update(&mut model.list, msg, &model.data);
            apply_list_effect(model, effect)
        }
        Msg::Overlay(msg) => {
            update_overlay(model, msg);
            Effect::None
        }
        Msg::InstallFinished { slug, result } => {
            // 成功・失敗を問わず必ずペンディング解除（取得/解放の対）
            model.data.clear_pending(&slug);
            match result {
                Ok(outcome) => model.data.apply_install_success(&slug, outcome.activate_url),
                Err(message) => model.notice = Some(message),
            }
            Effect::None
        }
    }
}

/// 一覧画面からの実行要求を反映する
fn apply_list_effect(model: &mut Model, effect: list::UpdateEffect) -> Effect {
    if let Some(url) = effect.navigate {
        // activate はビューから見ると終端アクション。
        // ナビゲーション自体はビュー終了後に呼び出し側が行う。
        model.navigation = Some(url);
        model.should_quit = true;
        return Effect::None;
    }

    if let Some(slug) = effect.open_detail {
        // 開いている最中でも単一値なので差し替えるだけでよい
        model.overlay = Some(overlay::Model::open(&slug));
        return Effect::LoadDetail { slug };
    }

    if let Some(slug) = effect.start_install {
        match model.data.nonce.clone() {
            Some(nonce) => {
                model.data.mark_pending(&slug);
                return Effect::StartInstall { slug, nonce };
            }
            None => {
                model.notice = Some(
                    "Install nonce not configured (set nonce in config.toml or --nonce)"
                        .to_string(),
                );
            }
        }
    }

    Effect::None
}

/// オーバーレイのメッセージを反映する
fn update_overlay(model: &mut Model, msg: overlay::Msg) {
    match msg {
        overlay::Msg::Close => {
            model.overlay = None;
        }
        overlay::Msg::Loaded { slug, result } => {
            // 閉じられた後・別スラッグへ差し替えられた後に届いた完了通知は捨てる
            if let Some(ov) = model.overlay.as_mut() {
                if ov.slug == slug {
                    ov.finish_load(result);
                }
            }
        }
        overlay::Msg::ScrollUp => {
            if let Some(ov) = model.overlay.as_mut() {
                ov.scroll_up();
            }
        }
        overlay::Msg::ScrollDown => {
            if let Some(ov) = model.overlay.as_mut() {
                ov.scroll_down();
            }
        }
    }
}

// ============================================================================
// view（描画）
// ============================================================================

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    list::view(f, &model.list, &model.data);

    if let Some(ov) = &model.overlay {
        overlay::view(f, ov);
    }

    if let Some(text) = &model.notice {
        view_notice(f, text);
    }
}

/// ブロッキングエラー通知を描画
fn view_notice(f: &mut Frame, text: &str) {
    let area = f.area();
    let dialog_area = super::dialog_rect(area.width.saturating_sub(10).clamp(20, 70), 8, area);
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(dialog_area);

    let paragraph = Paragraph::new(format!("\n  {}", text))
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);

    let help =
        Paragraph::new(" Enter: dismiss").style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
