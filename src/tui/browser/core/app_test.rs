use super::*;
use crate::tui::browser::screens::list;
use crate::tui::browser::screens::overlay;

fn make_record(slug: &str, installed: bool, activated: bool) -> PluginRecord {
    PluginRecord {
        name: format!("Plugin {}", slug),
        slug: slug.to_string(),
        description: "desc".to_string(),
        logo_url: "logo".to_string(),
        docs_url: "docs".to_string(),
        installed,
        activated,
        activate_url: None,
    }
}

fn make_model(records: Vec<PluginRecord>) -> Model {
    Model::new(records, Some("nonce-1".to_string()))
}

// ============================================================================
// インストールフロー テスト
// ============================================================================

#[test]
fn install_action_marks_pending_and_requests_install() {
    let mut model = make_model(vec![make_record("a", false, false)]);

    let effect = update(&mut model, Msg::List(list::Msg::Action));

    assert_eq!(
        effect,
        Effect::StartInstall {
            slug: "a".to_string(),
            nonce: "nonce-1".to_string()
        }
    );
    assert!(model.data.is_pending("a"));
}

#[test]
fn install_success_updates_record_and_clears_pending() {
    // install("a") が activateUrl="u" で解決するシナリオ
    let mut model = make_model(vec![make_record("a", false, false)]);
    update(&mut model, Msg::List(list::Msg::Action));

    update(
        &mut model,
        Msg::InstallFinished {
            slug: "a".to_string(),
            result: Ok(InstallOutcome {
                activate_url: "u".to_string(),
            }),
        },
    );

    let a = model.data.find_plugin("a").unwrap();
    assert!(a.installed);
    assert_eq!(a.activate_url.as_deref(), Some("u"));
    assert!(!model.data.is_pending("a"));
    assert_eq!(crate::catalog::Status::of(a).label(), "Activate Now");
    assert!(model.notice.is_none());
}

#[test]
fn install_success_leaves_other_records_untouched() {
    let mut model = make_model(vec![
        make_record("a", false, false),
        make_record("b", false, false),
    ]);
    update(&mut model, Msg::List(list::Msg::Action));

    update(
        &mut model,
        Msg::InstallFinished {
            slug: "a".to_string(),
            result: Ok(InstallOutcome {
                activate_url: "u".to_string(),
            }),
        },
    );

    let b = model.data.find_plugin("b").unwrap();
    assert!(!b.installed);
    assert_eq!(b.activate_url, None);
}

#[test]
fn install_failure_raises_notice_and_clears_pending() {
    let mut model = make_model(vec![make_record("a", false, false)]);
    update(&mut model, Msg::List(list::Msg::Action));

    update(
        &mut model,
        Msg::InstallFinished {
            slug: "a".to_string(),
            result: Err("Nonce check failed".to_string()),
        },
    );

    assert!(!model.data.is_pending("a"));
    assert!(!model.data.find_plugin("a").unwrap().installed);
    assert!(model
        .notice
        .as_deref()
        .is_some_and(|n| n.contains("Nonce check failed")));
}

#[test]
fn pending_slug_ignores_further_actions() {
    let mut model = make_model(vec![make_record("a", false, false)]);
    update(&mut model, Msg::List(list::Msg::Action));

    // ペンディング中の再操作は無効
    let effect = update(&mut model, Msg::List(list::Msg::Action));
    assert_eq!(effect, Effect::None);
}

#[test]
fn missing_nonce_raises_notice_instead_of_install() {
    let mut model = Model::new(vec![make_record("a", false, false)], None);

    let effect = update(&mut model, Msg::List(list::Msg::Action));

    assert_eq!(effect, Effect::None);
    assert!(!model.data.is_pending("a"));
    assert!(model.notice.is_some());
}

// ============================================================================
// アクティベーションフロー テスト
// ============================================================================

#[test]
fn activate_navigates_with_normalized_url_and_quits() {
    let mut record = make_record("a", true, false);
    record.activate_url =
        Some("https://example.com/p.php?plugin=a%2Fa.php&amp;action=activate".to_string());
    let mut model = make_model(vec![record]);

    let effect = update(&mut model, Msg::List(list::Msg::Action));

    // ネットワーク経路は使わない
    assert_eq!(effect, Effect::None);
    assert_eq!(
        model.navigation.as_deref(),
        Some("https://example.com/p.php?plugin=a/a.php&action=activate")
    );
    // ビューから見ると終端アクション
    assert!(model.should_quit);
    assert!(!model.data.is_pending("a"));
}

#[test]
fn activated_record_has_disabled_control() {
    let mut model = make_model(vec![make_record("a", true, true)]);

    let effect = update(&mut model, Msg::List(list::Msg::Action));

    assert_eq!(effect, Effect::None);
    assert!(model.navigation.is_none());
    assert!(!model.should_quit);
}

// ============================================================================
// オーバーレイ テスト
// ============================================================================

#[test]
fn details_opens_overlay_loading_and_requests_fetch() {
    let mut model = make_model(vec![make_record("a", false, false)]);

    let effect = update(&mut model, Msg::List(list::Msg::Details));

    assert_eq!(
        effect,
        Effect::LoadDetail {
            slug: "a".to_string()
        }
    );
    let ov = model.overlay.as_ref().unwrap();
    assert_eq!(ov.slug, "a");
    assert!(ov.loading);
}

#[test]
fn overlay_loaded_clears_loading() {
    let mut model = make_model(vec![make_record("a", false, false)]);
    update(&mut model, Msg::List(list::Msg::Details));

    update(
        &mut model,
        Msg::Overlay(overlay::Msg::Loaded {
            slug: "a".to_string(),
            result: Ok("Plugin details".to_string()),
        }),
    );

    let ov = model.overlay.as_ref().unwrap();
    assert!(!ov.loading);
    assert_eq!(ov.content.as_deref(), Some("Plugin details"));
}

#[test]
fn overlay_load_failure_is_explicit_error() {
    let mut model = make_model(vec![make_record("a", false, false)]);
    update(&mut model, Msg::List(list::Msg::Details));

    update(
        &mut model,
        Msg::Overlay(overlay::Msg::Loaded {
            slug: "a".to_string(),
            result: Err("connection refused".to_string()),
        }),
    );

    let ov = model.overlay.as_ref().unwrap();
    assert!(!ov.loading);
    assert_eq!(ov.error.as_deref(), Some("connection refused"));
}

#[test]
fn stale_load_for_replaced_slug_is_ignored() {
    let mut model = make_model(vec![
        make_record("a", false, false),
        make_record("b", false, false),
    ]);
    update(&mut model, Msg::List(list::Msg::Details));
    // "a" のロード中に "b" へ差し替え
    update(&mut model, Msg::List(list::Msg::Down));
    update(&mut model, Msg::List(list::Msg::Details));

    update(
        &mut model,
        Msg::Overlay(overlay::Msg::Loaded {
            slug: "a".to_string(),
            result: Ok("stale".to_string()),
        }),
    );

    let ov = model.overlay.as_ref().unwrap();
    assert_eq!(ov.slug, "b");
    assert!(ov.loading);
    assert!(ov.content.is_none());
}

#[test]
fn close_then_reopen_resets_loading() {
    let mut model = make_model(vec![make_record("a", false, false)]);
    update(&mut model, Msg::List(list::Msg::Details));
    update(
        &mut model,
        Msg::Overlay(overlay::Msg::Loaded {
            slug: "a".to_string(),
            result: Ok("body".to_string()),
        }),
    );

    update(&mut model, Msg::Overlay(overlay::Msg::Close));
    assert!(model.overlay.is_none());

    update(&mut model, Msg::List(list::Msg::Details));
    assert!(model.overlay.as_ref().unwrap().loading);
}

// ============================================================================
// キー変換・通知 テスト
// ============================================================================

#[test]
fn notice_blocks_all_input_except_dismiss() {
    let mut model = make_model(vec![make_record("a", false, false)]);
    model.notice = Some("boom".to_string());

    assert!(model.key_to_msg(KeyCode::Char('j')).is_none());
    assert!(model.key_to_msg(KeyCode::Char('q')).is_none());
    assert!(matches!(
        model.key_to_msg(KeyCode::Enter),
        Some(Msg::DismissNotice)
    ));

    update(&mut model, Msg::DismissNotice);
    assert!(model.notice.is_none());
}

#[test]
fn overlay_takes_key_input_while_open() {
    let mut model = make_model(vec![make_record("a", false, false)]);
    update(&mut model, Msg::List(list::Msg::Details));

    assert!(matches!(
        model.key_to_msg(KeyCode::Esc),
        Some(Msg::Overlay(overlay::Msg::Close))
    ));
    // 一覧のアクションキーはオーバーレイ表示中は届かない
    assert!(model.key_to_msg(KeyCode::Enter).is_none());
}

#[test]
fn quit_key_sets_flag() {
    let mut model = make_model(vec![make_record("a", false, false)]);
    let msg = model.key_to_msg(KeyCode::Char('q')).unwrap();
    update(&mut model, msg);
    assert!(model.should_quit);
}
