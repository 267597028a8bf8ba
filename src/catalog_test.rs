use super::*;

fn make_record(slug: &str, installed: bool, activated: bool) -> PluginRecord {
    PluginRecord {
        name: format!("Plugin {}", slug),
        slug: slug.to_string(),
        description: "A test plugin".to_string(),
        logo_url: "https://example.com/logo.png".to_string(),
        docs_url: "https://example.com/docs".to_string(),
        installed,
        activated,
        activate_url: None,
    }
}

// ============================================================================
// デシリアライズ テスト
// ============================================================================

#[test]
fn record_parses_original_field_names() {
    let json = r#"{
        "name": "SEO Booster",
        "slug": "seo-booster",
        "description": "Boost your SEO",
        "logoURL": "https://example.com/seo.png",
        "docsURL": "https://example.com/seo-docs",
        "installed": true,
        "activated": false,
        "activateUrl": "https://example.com/wp-admin/plugins.php?action=activate"
    }"#;

    let record: PluginRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.slug, "seo-booster");
    assert_eq!(record.logo_url, "https://example.com/seo.png");
    assert_eq!(record.docs_url, "https://example.com/seo-docs");
    assert!(record.installed);
    assert!(!record.activated);
    assert_eq!(
        record.activate_url.as_deref(),
        Some("https://example.com/wp-admin/plugins.php?action=activate")
    );
}

#[test]
fn record_parses_without_activate_url() {
    let json = r#"{
        "name": "Forms",
        "slug": "forms",
        "description": "Forms plugin",
        "logoURL": "https://example.com/forms.png",
        "docsURL": "https://example.com/forms-docs",
        "installed": false,
        "activated": false
    }"#;

    let record: PluginRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.activate_url, None);
}

// ============================================================================
// Catalog テスト
// ============================================================================

#[test]
fn from_records_preserves_order() {
    let catalog = Catalog::from_records(vec![
        make_record("c", false, false),
        make_record("a", false, false),
        make_record("b", false, false),
    ])
    .unwrap();

    let slugs: Vec<&str> = catalog.records().iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["c", "a", "b"]);
}

#[test]
fn from_records_rejects_duplicate_slug() {
    let result = Catalog::from_records(vec![
        make_record("a", false, false),
        make_record("a", true, false),
    ]);

    assert!(matches!(result, Err(WppError::InvalidCatalog(_))));
}

#[test]
fn find_returns_matching_record() {
    let catalog = Catalog::from_records(vec![
        make_record("a", false, false),
        make_record("b", true, false),
    ])
    .unwrap();

    assert!(catalog.find("b").is_some_and(|r| r.installed));
    assert!(catalog.find("missing").is_none());
}

#[test]
fn load_from_missing_file_is_invalid_catalog() {
    let result = Catalog::load_from(std::path::Path::new("/nonexistent/catalog.json"));
    assert!(matches!(result, Err(WppError::InvalidCatalog(_))));
}

#[test]
fn load_from_reads_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{
            "name": "One",
            "slug": "one",
            "description": "d",
            "logoURL": "l",
            "docsURL": "u",
            "installed": false,
            "activated": false
        }]"#,
    )
    .unwrap();

    let catalog = Catalog::load_from(&path).unwrap();
    assert_eq!(catalog.records().len(), 1);
    assert_eq!(catalog.records()[0].slug, "one");
}

// ============================================================================
// Status 導出テスト
// ============================================================================

#[test]
fn status_activated_wins_regardless_of_installed() {
    // activated ⇒ installed の不変条件が破れていても activated が勝つ
    let record = make_record("a", false, true);
    assert_eq!(Status::of(&record), Status::Activated);
    assert_eq!(Status::of(&record).label(), "Activated");
    assert!(!Status::of(&record).is_actionable());
}

#[test]
fn status_installed_not_activated_is_activate_now() {
    let record = make_record("a", true, false);
    assert_eq!(Status::of(&record), Status::ActivateNow);
    assert_eq!(Status::of(&record).label(), "Activate Now");
    assert!(Status::of(&record).is_actionable());
}

#[test]
fn status_not_installed_is_install_now() {
    let record = make_record("a", false, false);
    assert_eq!(Status::of(&record), Status::InstallNow);
    assert_eq!(Status::of(&record).label(), "Install Now");
}

#[test]
fn busy_label_depends_only_on_installed() {
    assert_eq!(busy_label(&make_record("a", false, false)), "Installing...");
    assert_eq!(busy_label(&make_record("a", true, false)), "Activating...");
    // activated はビジーラベルに影響しない
    assert_eq!(busy_label(&make_record("a", false, true)), "Installing...");
}
