//! CLIコマンドの結果表示

use owo_colors::OwoColorize;
use std::fmt;

/// アクション結果の1行サマリ
pub struct ActionSummary {
    pub prefix: String,
    pub message: String,
}

impl ActionSummary {
    pub fn installed(slug: &str) -> Self {
        Self {
            prefix: "✓".green().to_string(),
            message: format!("{} installed", slug.green()),
        }
    }

    pub fn activated(slug: &str) -> Self {
        Self {
            prefix: "✓".green().to_string(),
            message: format!("{} activated", slug.green()),
        }
    }

    pub fn navigated(target: &str) -> Self {
        Self {
            prefix: "✓".green().to_string(),
            message: format!("navigated to {}", target.green()),
        }
    }

    pub fn skipped(slug: &str, reason: &str) -> Self {
        Self {
            prefix: "•".yellow().to_string(),
            message: format!("{}: {}", slug.yellow(), reason),
        }
    }
}

impl fmt::Display for ActionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}
