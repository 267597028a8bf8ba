//! プロモーションプラグインのブラウズ TUI
//!
//! ## モジュール構成
//!
//! - `core`: Model/Msg/Effect/update/view と共有データ
//! - `dispatch`: 非同期アクション（インストール・詳細取得）の実行
//! - `screens`: 一覧と詳細オーバーレイ
//!
//! 実行モデルは単一イベントループ。インストールの待機だけが中断点で、
//! 別スラッグの操作やオーバーレイはその間も動き続ける。

mod core;
mod dispatch;
mod screens;

use crate::admin::AdminClient;
use crate::catalog::PluginRecord;
use crate::error::Result;
use self::core::{update, view, Model, Msg};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

/// TUI を実行する
///
/// 戻り値はビュー終了後に辿るべきナビゲーション先。activate 操作は
/// ビューを畳んでから呼び出し側が実際の遷移を行う。
pub async fn run(
    client: AdminClient,
    plugins: Vec<PluginRecord>,
    nonce: Option<String>,
) -> Result<Option<String>> {
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal_ui = Terminal::new(backend)?;

    let result = event_loop(&mut terminal_ui, client, plugins, nonce).await;

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// メインループ
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: AdminClient,
    plugins: Vec<PluginRecord>,
    nonce: Option<String>,
) -> Result<Option<String>> {
    let (tx, mut rx) = unbounded_channel::<Msg>();
    let mut model = Model::new(plugins, nonce);

    spawn_input_task(tx.clone());

    loop {
        terminal.draw(|f| view(f, &model))?;
        if model.should_quit {
            break;
        }

        let Some(msg) = rx.recv().await else { break };
        let effect = update(&mut model, msg);
        dispatch::perform(&client, effect, &tx);
    }

    Ok(model.navigation.take())
}

/// キー入力を読み取ってメッセージとして送るタスク
///
/// 受信側が閉じたらポーリング周期内に自然終了する。
fn spawn_input_task(tx: UnboundedSender<Msg>) {
    tokio::task::spawn_blocking(move || loop {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(Msg::Key(key.code)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            },
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}
