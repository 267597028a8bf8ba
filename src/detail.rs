//! 詳細ページHTMLの端末表示用テキスト化
//!
//! 埋め込みフレームの代わりに取得したHTMLをプレーンテキストへ落とす。
//! 表示専用であり、内容の検証は行わない。

use regex::Regex;
use std::sync::OnceLock;

fn block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<(script|style|head)\b.*?</(script|style|head)>").unwrap()
    })
}

fn break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</(p|div|li|tr|h[1-6])>|<br\s*/?>").unwrap())
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").unwrap())
}

fn blank_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n[ \t]*(\n[ \t]*)+").unwrap())
}

/// HTMLをプレーンテキストへ落とす
pub fn html_to_text(html: &str) -> String {
    let without_blocks = block_re().replace_all(html, "");
    let with_breaks = break_re().replace_all(&without_blocks, "\n");
    let without_tags = tag_re().replace_all(&with_breaks, "");
    let decoded = decode_entities(&without_tags);

    let trimmed_lines: Vec<&str> = decoded.lines().map(str::trim_end).collect();
    let joined = trimmed_lines.join("\n");
    blank_re().replace_all(&joined, "\n\n").trim().to_string()
}

/// よく出る実体参照だけを戻す（&amp; は最後）
fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
