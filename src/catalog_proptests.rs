use super::*;
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = PluginRecord> {
    ("[a-z][a-z0-9-]{0,15}", any::<bool>(), any::<bool>()).prop_map(
        |(slug, installed, activated)| PluginRecord {
            name: slug.to_uppercase(),
            slug,
            description: String::new(),
            logo_url: String::new(),
            docs_url: String::new(),
            installed,
            activated,
            activate_url: None,
        },
    )
}

proptest! {
    /// ステータス導出は優先順位どおり: activated > installed > 未導入
    #[test]
    fn prop_status_follows_precedence(record in arb_record()) {
        let status = Status::of(&record);
        if record.activated {
            prop_assert_eq!(status, Status::Activated);
        } else if record.installed {
            prop_assert_eq!(status, Status::ActivateNow);
        } else {
            prop_assert_eq!(status, Status::InstallNow);
        }
    }

    /// アクティベート済みだけが操作不能
    #[test]
    fn prop_only_activated_is_disabled(record in arb_record()) {
        prop_assert_eq!(Status::of(&record).is_actionable(), !record.activated);
    }

    /// ビジーラベルは installed だけで決まる（activated は無関係）
    #[test]
    fn prop_busy_label_ignores_activated(record in arb_record()) {
        let mut flipped = record.clone();
        flipped.activated = !flipped.activated;
        prop_assert_eq!(busy_label(&record), busy_label(&flipped));
    }
}
