use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // The prompter text color of a classic glass rig: white on black, with
    // the play control in warning yellow.
    pub const PROMPTER_FG: Color = Color::White;
    pub const PROMPTER_BG: Color = Color::Black;
    pub const PLAY_ACCENT: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Cyan;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn text_primary() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn list_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompter_text() -> Style {
        Style::default().fg(Self::PROMPTER_FG).bg(Self::PROMPTER_BG)
    }

    pub fn prompter_bg() -> Style {
        Style::default().bg(Self::PROMPTER_BG)
    }

    pub fn slider_track() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn slider_thumb_active() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn slider_thumb() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_playing() -> Style {
        Style::default()
            .fg(Self::PLAY_ACCENT)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_message() -> Style {
        Style::default()
            .fg(Self::PLAY_ACCENT)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
