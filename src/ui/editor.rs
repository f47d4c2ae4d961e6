use crate::app::state::AppState;
use crate::ui::layout::popup_rect;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &AppState) {
    let popup_area = popup_rect(frame.area(), 70, 70, 50, 12);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" New Script — Ctrl+S to save, Esc to cancel ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let editor = &state.editor;
    let visible = inner.height as usize;

    // Window the lines so the cursor row stays on screen.
    let start = (editor.row + 1).saturating_sub(visible);
    let lines: Vec<Line> = editor
        .lines
        .iter()
        .take(start + visible)
        .skip(start)
        .map(|l| Line::from(Span::styled(l.as_str(), Theme::text_primary())))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    // Cursor position: display width of the line up to the byte cursor
    let prefix = &editor.lines[editor.row][..editor.col];
    let cursor_x = inner.x + (prefix.width() as u16).min(inner.width.saturating_sub(1));
    let cursor_y = inner.y + (editor.row - start) as u16;
    frame.set_cursor_position((cursor_x, cursor_y));
}
