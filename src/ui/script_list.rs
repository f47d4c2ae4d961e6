use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Scripts ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.scripts.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No scripts yet.",
                Theme::text_secondary(),
            )),
            Line::from(vec![
                Span::styled("  Press ", Theme::text_muted()),
                Span::styled("a", Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD)),
                Span::styled(" to write one.", Theme::text_muted()),
            ]),
        ]);
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let total = state.scripts.len();

    // Keep the selection on screen, pinned to the bottom edge when moving
    // down past the window.
    let start = (state.selected + 1).saturating_sub(visible);
    let end = (start + visible).min(total);

    let preview_len = state.config.ui.preview_length;
    let lines: Vec<Line> = state
        .scripts
        .iter()
        .enumerate()
        .take(end)
        .skip(start)
        .map(|(i, script)| {
            let preview = preview(script, preview_len);
            let text = format!(" {:>3}  {}", i + 1, preview);
            let style = if i == state.selected {
                Theme::list_selected()
            } else {
                Theme::text_primary()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);

    if total > visible {
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible)).position(start);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// One-row preview of a script: newlines flattened, trimmed to `max` chars
/// with an ellipsis.
fn preview(script: &str, max: usize) -> String {
    let flat: String = script
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() > max {
        let cut: String = flat.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_scripts_pass_through() {
        assert_eq!(preview("hello", 100), "hello");
    }

    #[test]
    fn long_scripts_are_trimmed_with_ellipsis() {
        let long = "x".repeat(150);
        let p = preview(&long, 100);
        assert_eq!(p.chars().count(), 100);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn newlines_flatten_to_spaces() {
        assert_eq!(preview("line one\nline two", 100), "line one line two");
    }

    #[test]
    fn trim_is_char_safe_for_multibyte_text() {
        let long = "é".repeat(150);
        let p = preview(&long, 100);
        assert_eq!(p.chars().count(), 100);
    }
}
