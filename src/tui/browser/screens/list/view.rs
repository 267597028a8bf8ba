//! 一覧画面の view（描画）

use super::model::Model;
use crate::catalog::{busy_label, PluginRecord, Status};
use crate::tui::browser::core::DataStore;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model, data: &DataStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // ヘッダー
            Constraint::Min(1),    // プラグインリスト
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    view_header(f, chunks[0]);
    view_rows(f, model, data, chunks[1]);
    view_help(f, chunks[2]);
}

/// ヘッダー（タイトルとサブタイトル）
fn view_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            " Our Plugins",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            " Discover and install our premium WordPress plugins to enhance your website functionality.",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// レコードをカタログ順のまま行へ射影する
fn view_rows(f: &mut Frame, model: &Model, data: &DataStore, area: Rect) {
    let items: Vec<ListItem> = data
        .plugins
        .iter()
        .map(|p| row_item(p, data.is_pending(&p.slug)))
        .collect();

    let title = format!(" Plugins ({}) ", data.plugins.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = model.state.clone();
    f.render_stateful_widget(list, area, &mut state);
}

/// 1レコード分の行を構築する
fn row_item(plugin: &PluginRecord, pending: bool) -> ListItem<'static> {
    let (control, control_style) = control_text(plugin, pending);

    let title_line = Line::from(vec![
        Span::styled(
            plugin.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(control, control_style),
    ]);
    let description_line = Line::styled(
        format!("    {}", plugin.description),
        Style::default().fg(Color::Gray),
    );
    let docs_line = Line::styled(
        format!("    Docs: {}", plugin.docs_url),
        Style::default().fg(Color::DarkGray),
    );

    ListItem::new(vec![title_line, description_line, docs_line, Line::raw("")])
}

/// コントロール表示（ステータスラベルまたはビジーインジケータ）
fn control_text(plugin: &PluginRecord, pending: bool) -> (String, Style) {
    if pending {
        // ビジーラベルは installed だけから決まる
        return (
            format!("[⧗ {}]", busy_label(plugin)),
            Style::default().fg(Color::Yellow),
        );
    }
    let status = Status::of(plugin);
    let style = if !status.is_actionable() {
        Style::default().fg(Color::DarkGray)
    } else if status == Status::ActivateNow {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };
    (format!("[{}]", status.label()), style)
}

/// ヘルプ
fn view_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(" up/down: move | Enter: install/activate | d: details | q: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
