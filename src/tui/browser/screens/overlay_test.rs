use super::*;

#[test]
fn open_starts_loading() {
    let model = Model::open("seo-booster");
    assert_eq!(model.slug, "seo-booster");
    assert!(model.loading);
    assert!(model.content.is_none());
    assert!(model.error.is_none());
    assert_eq!(model.scroll, 0);
}

#[test]
fn finish_load_with_content() {
    let mut model = Model::open("a");
    model.finish_load(Ok("body".to_string()));
    assert!(!model.loading);
    assert_eq!(model.content.as_deref(), Some("body"));
    assert!(model.error.is_none());
}

#[test]
fn finish_load_with_error() {
    let mut model = Model::open("a");
    model.finish_load(Err("404".to_string()));
    assert!(!model.loading);
    assert!(model.content.is_none());
    assert_eq!(model.error.as_deref(), Some("404"));
}

#[test]
fn scroll_saturates_at_zero() {
    let mut model = Model::open("a");
    model.scroll_up();
    assert_eq!(model.scroll, 0);
    model.scroll_down();
    model.scroll_down();
    model.scroll_up();
    assert_eq!(model.scroll, 1);
}

#[test]
fn key_mapping() {
    assert!(matches!(key_to_msg(KeyCode::Esc), Some(Msg::Close)));
    assert!(matches!(key_to_msg(KeyCode::Char('q')), Some(Msg::Close)));
    assert!(matches!(key_to_msg(KeyCode::Up), Some(Msg::ScrollUp)));
    assert!(matches!(key_to_msg(KeyCode::Down), Some(Msg::ScrollDown)));
    assert!(key_to_msg(KeyCode::Enter).is_none());
}
