//! 共通 UI ユーティリティ

use ratatui::prelude::Rect;

/// 画面中央に配置するダイアログ領域を計算する
pub fn dialog_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
