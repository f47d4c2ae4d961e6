use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Mode segment
    match state.screen {
        Screen::Home => {
            parts.push(Span::styled(
                " HOME ",
                Style::default().fg(Color::Black).bg(Theme::ACCENT),
            ));
        }
        Screen::Prompter => {
            let running = state
                .prompter
                .as_ref()
                .map(|p| p.controller.is_running())
                .unwrap_or(false);
            let label = if running { " ▶ PLAYING " } else { " ⏸ PAUSED " };
            parts.push(Span::styled(label, Theme::status_playing()));
        }
    }

    // Status message, or the key help for the current screen
    if let Some(ref msg) = state.status_message {
        parts.push(Span::styled(format!(" {} ", msg), Theme::status_message()));
    } else {
        let help = match state.screen {
            Screen::Home => " ↑↓ Select  Enter Open  a Add  d Delete  s Settings  q Quit",
            Screen::Prompter => " Space Play/Pause  ↑↓ Scroll  m Mirror  Esc Back",
        };
        parts.push(Span::styled(help, Theme::status_bar()));
    }

    // Right-aligned segment
    let right = match state.screen {
        Screen::Home => format!(
            " {} script{} ",
            state.scripts.len(),
            if state.scripts.len() == 1 { "" } else { "s" }
        ),
        Screen::Prompter => match state.prompter.as_ref() {
            Some(p) => format!(
                " font {} · speed {}{} ",
                p.font_size,
                p.controller.speed(),
                if p.mirror { " · mirrored" } else { "" }
            ),
            None => String::new(),
        },
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(right, Theme::status_bar()));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
