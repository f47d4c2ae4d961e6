use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        content: main_chunks[0],
        status_bar: main_chunks[1],
    }
}

/// Center a popup of `percent_w` x `percent_h` of the screen, with minimum
/// dimensions, clamped to fit.
pub fn popup_rect(area: Rect, percent_w: u16, percent_h: u16, min_w: u16, min_h: u16) -> Rect {
    let popup_w = (area.width * percent_w / 100)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let popup_h = (area.height * percent_h / 100)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}
