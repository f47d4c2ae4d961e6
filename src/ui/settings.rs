//! The settings dialog: two sliders, font size and scrolling speed, saved
//! together when the dialog is dismissed with Enter.

use crate::app::state::{AppState, SettingsField};
use crate::store::prefs::{FONT_SIZE_MAX, FONT_SIZE_MIN, SCROLL_SPEED_MAX, SCROLL_SPEED_MIN};
use crate::ui::layout::popup_rect;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let popup_area = popup_rect(frame.area(), 50, 40, 46, 10);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Settings — Enter to save, Esc to cancel ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 7 || inner.width < 20 {
        return;
    }

    let settings = &state.settings;
    let track_w = inner.width.saturating_sub(10) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(label_line(
        format!("Font Size: {}", settings.font_size),
        settings.field == SettingsField::FontSize,
    ));
    lines.push(slider_line(
        "A ",
        " A",
        settings.font_size,
        FONT_SIZE_MIN,
        FONT_SIZE_MAX,
        track_w,
        settings.field == SettingsField::FontSize,
    ));
    lines.push(Line::from(""));
    lines.push(label_line(
        format!("Scrolling Speed: {}", settings.scroll_speed),
        settings.field == SettingsField::ScrollSpeed,
    ));
    lines.push(slider_line(
        "🐢",
        "🐇",
        settings.scroll_speed,
        SCROLL_SPEED_MIN,
        SCROLL_SPEED_MAX,
        track_w,
        settings.field == SettingsField::ScrollSpeed,
    ));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn label_line(text: String, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Theme::text_secondary()
    };
    Line::from(Span::styled(text, style))
}

/// A horizontal slider: a track of `track_w` cells with a thumb placed
/// proportionally to `value` within `[min, max]`.
fn slider_line(
    left: &'static str,
    right: &'static str,
    value: u16,
    min: u16,
    max: u16,
    track_w: usize,
    selected: bool,
) -> Line<'static> {
    let track_w = track_w.max(3);
    let pos = thumb_position(value, min, max, track_w);

    let thumb_style = if selected {
        Theme::slider_thumb_active()
    } else {
        Theme::slider_thumb()
    };

    Line::from(vec![
        Span::styled(left, Theme::text_secondary()),
        Span::raw(" "),
        Span::styled("─".repeat(pos), Theme::slider_track()),
        Span::styled("●", thumb_style),
        Span::styled("─".repeat(track_w - 1 - pos), Theme::slider_track()),
        Span::raw(" "),
        Span::styled(right, Theme::text_secondary()),
    ])
}

fn thumb_position(value: u16, min: u16, max: u16, track_w: usize) -> usize {
    let span = (max - min) as usize;
    let offset = value.clamp(min, max).saturating_sub(min) as usize;
    (offset * (track_w - 1)) / span.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_spans_the_full_track() {
        assert_eq!(thumb_position(20, 20, 100, 40), 0);
        assert_eq!(thumb_position(100, 20, 100, 40), 39);
        let mid = thumb_position(60, 20, 100, 40);
        assert!((18..=21).contains(&mid));
    }

    #[test]
    fn thumb_clamps_out_of_range_values() {
        assert_eq!(thumb_position(5, 20, 100, 40), 0);
        assert_eq!(thumb_position(200, 20, 100, 40), 39);
    }
}
