mod editor;
mod layout;
mod prompter_view;
mod script_list;
mod settings;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Modal, Screen};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    match state.screen {
        Screen::Home => script_list::render(frame, app_layout.content, state),
        Screen::Prompter => prompter_view::render(frame, app_layout.content, state),
    }

    match state.modal {
        Modal::AddScript => editor::render(frame, state),
        Modal::Settings => settings::render(frame, state),
        Modal::None => {}
    }

    status_bar::render(frame, app_layout.status_bar, state);
}
