//! 詳細オーバーレイの Model/Msg/view
//!
//! 埋め込みフレーム相当のモーダル。開くたびにロード中へリセットされ、
//! フレームのロード完了通知（詳細ページの取得完了）で解除される。
//! タイムアウトは課さない。取得失敗は明示的なエラー表示へ遷移する。

use crate::tui::browser::core::dialog_rect;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

// ============================================================================
// Model（画面状態）
// ============================================================================

/// オーバーレイの画面状態（開いているときだけ存在する）
pub struct Model {
    /// 表示対象のスラッグ
    pub slug: String,
    /// フレームがロード完了を通知するまで true
    pub loading: bool,
    /// ロード済み本文（プレーンテキスト化済み）
    pub content: Option<String>,
    /// ロード失敗時のメッセージ
    pub error: Option<String>,
    /// スクロール位置
    pub scroll: u16,
}

impl Model {
    /// オーバーレイを開く。常にロード中状態から始まる。
    pub fn open(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            loading: true,
            content: None,
            error: None,
            scroll: 0,
        }
    }

    /// フレームのロード完了を反映する
    pub fn finish_load(&mut self, result: Result<String, String>) {
        self.loading = false;
        match result {
            Ok(content) => self.content = Some(content),
            Err(message) => self.error = Some(message),
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// オーバーレイへのメッセージ
pub enum Msg {
    /// 閉じる（閉じる操作は内容の状態に関わらず常に有効）
    Close,
    /// フレームのロード完了。成功時は本文、失敗時はメッセージ。
    Loaded {
        slug: String,
        result: Result<String, String>,
    },
    ScrollUp,
    ScrollDown,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Esc | KeyCode::Char('q') => Some(Msg::Close),
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::ScrollDown),
        _ => None,
    }
}

// ============================================================================
// view（描画）
// ============================================================================

/// オーバーレイを描画（一覧の上に重ねる）
pub fn view(f: &mut Frame, model: &Model) {
    let area = f.area();
    let dialog_width = area.width.saturating_sub(8).clamp(20, 100);
    let dialog_height = area.height.saturating_sub(4).max(8);
    let dialog_area = dialog_rect(dialog_width, dialog_height, area);
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 本文
            Constraint::Length(1), // ヘルプ
        ])
        .split(dialog_area);

    let title = format!(" Plugin Information: {} ", model.slug);
    let body = if model.loading {
        Text::styled("\n  Loading...", Style::default().fg(Color::DarkGray))
    } else if let Some(error) = &model.error {
        Text::styled(
            format!("\n  Failed to load plugin information:\n  {}", error),
            Style::default().fg(Color::Red),
        )
    } else {
        Text::raw(model.content.clone().unwrap_or_default())
    };

    let paragraph = Paragraph::new(body)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((model.scroll, 0));
    f.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(" up/down: scroll | Esc: close")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;
