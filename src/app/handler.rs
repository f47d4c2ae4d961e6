use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::ScrollTick => handle_scroll_tick(state),
    }
}

/// Advance the prompter offset. A tick observed while Paused (one that was
/// already queued when the user toggled) must not move the text.
fn handle_scroll_tick(state: &mut AppState) -> Vec<Action> {
    if let Some(prompter) = state.prompter.as_mut() {
        if prompter.controller.tick() {
            state.dirty = true;
        }
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => {
            // A fresh keystroke clears the previous status message.
            state.status_message = None;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Modals capture all input when visible
    match state.modal {
        Modal::AddScript => return handle_editor_key(state, key),
        Modal::Settings => return handle_settings_key(state, key),
        Modal::None => {}
    }

    match state.screen {
        Screen::Home => handle_home_key(state, key),
        Screen::Prompter => handle_prompter_key(state, key),
    }
}

fn handle_home_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Home => {
            state.selected = 0;
            vec![]
        }
        KeyCode::End => {
            state.selected = state.scripts.len().saturating_sub(1);
            vec![]
        }
        KeyCode::Enter => {
            // The prompter receives the literal text; it has no way to look
            // a script up on its own.
            if let Some(text) = state.selected_script().cloned() {
                state.open_prompter(text);
            }
            vec![]
        }
        KeyCode::Char('a') => {
            state.editor.reset();
            state.modal = Modal::AddScript;
            vec![]
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if state.scripts.is_empty() {
                vec![]
            } else {
                vec![Action::DeleteScript {
                    index: state.selected,
                }]
            }
        }
        KeyCode::Char('s') => {
            state.settings = SettingsState::from_prefs(state.prefs);
            state.modal = Modal::Settings;
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_prompter_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        // Leaving the screen must stop the tick on every path.
        if state.close_prompter() {
            return vec![Action::StopScrolling];
        }
        return vec![];
    }

    let Some(prompter) = state.prompter.as_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Char(' ') => {
            if prompter.controller.toggle() {
                vec![Action::StartScrolling]
            } else {
                vec![Action::StopScrolling]
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            prompter.controller.scroll_rows(-1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            prompter.controller.scroll_rows(1);
            vec![]
        }
        KeyCode::PageUp => {
            prompter.controller.scroll_rows(-10);
            vec![]
        }
        KeyCode::PageDown => {
            prompter.controller.scroll_rows(10);
            vec![]
        }
        KeyCode::Home => {
            prompter.controller.rewind();
            vec![]
        }
        KeyCode::Char('m') => {
            prompter.mirror = !prompter.mirror;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Ctrl+S saves, no validation of the text (the empty script is legal)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        let text = state.editor.text();
        state.editor.reset();
        state.modal = Modal::None;
        return vec![Action::SaveScript { text }];
    }

    match key.code {
        KeyCode::Esc => {
            state.editor.reset();
            state.modal = Modal::None;
            vec![]
        }
        KeyCode::Enter => {
            state.editor.newline();
            vec![]
        }
        KeyCode::Backspace => {
            state.editor.backspace();
            vec![]
        }
        KeyCode::Left => {
            state.editor.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.editor.move_right();
            vec![]
        }
        KeyCode::Up => {
            state.editor.move_up();
            vec![]
        }
        KeyCode::Down => {
            state.editor.move_down();
            vec![]
        }
        KeyCode::Char(c) => {
            state.editor.insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            state.settings.toggle_field();
            vec![]
        }
        KeyCode::Left => {
            state.settings.adjust(-1);
            vec![]
        }
        KeyCode::Right => {
            state.settings.adjust(1);
            vec![]
        }
        KeyCode::Enter => {
            state.modal = Modal::None;
            vec![Action::SavePreferences {
                font_size: state.settings.font_size,
                scroll_speed: state.settings.scroll_speed,
            }]
        }
        KeyCode::Esc => {
            state.modal = Modal::None;
            vec![]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn state_with_scripts(scripts: &[&str]) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_scripts(scripts.iter().map(|s| s.to_string()).collect());
        state
    }

    #[test]
    fn enter_opens_prompter_with_selected_text() {
        let mut state = state_with_scripts(&["first", "second"]);
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.screen, Screen::Prompter);
        assert_eq!(state.prompter.as_ref().unwrap().text, "second");
        assert!(!state.prompter.as_ref().unwrap().controller.is_running());
    }

    #[test]
    fn space_toggles_scrolling_and_timer_actions() {
        let mut state = state_with_scripts(&["text"]);
        handle_event(&mut state, key(KeyCode::Enter));

        let actions = handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(matches!(&actions[..], [Action::StartScrolling]));
        assert!(state.prompter.as_ref().unwrap().controller.is_running());

        let actions = handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(matches!(&actions[..], [Action::StopScrolling]));
        assert!(!state.prompter.as_ref().unwrap().controller.is_running());
    }

    #[test]
    fn tick_after_pause_does_not_move_offset() {
        let mut state = state_with_scripts(&["text"]);
        handle_event(&mut state, key(KeyCode::Enter));
        handle_event(&mut state, key(KeyCode::Char(' ')));
        handle_event(&mut state, AppEvent::ScrollTick);
        handle_event(&mut state, key(KeyCode::Char(' ')));

        let offset = state.prompter.as_ref().unwrap().controller.offset();
        // a tick that was already queued when the user paused
        handle_event(&mut state, AppEvent::ScrollTick);
        handle_event(&mut state, AppEvent::ScrollTick);
        assert_eq!(state.prompter.as_ref().unwrap().controller.offset(), offset);
    }

    #[test]
    fn leaving_prompter_while_running_stops_the_timer() {
        let mut state = state_with_scripts(&["text"]);
        handle_event(&mut state, key(KeyCode::Enter));
        handle_event(&mut state, key(KeyCode::Char(' ')));

        let actions = handle_event(&mut state, key(KeyCode::Esc));
        assert!(matches!(&actions[..], [Action::StopScrolling]));
        assert_eq!(state.screen, Screen::Home);
        assert!(state.prompter.is_none());
    }

    #[test]
    fn leaving_paused_prompter_emits_no_timer_action() {
        let mut state = state_with_scripts(&["text"]);
        handle_event(&mut state, key(KeyCode::Enter));
        let actions = handle_event(&mut state, key(KeyCode::Esc));
        assert!(actions.is_empty());
    }

    #[test]
    fn editor_saves_with_ctrl_s() {
        let mut state = state_with_scripts(&[]);
        handle_event(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.modal, Modal::AddScript);

        for c in "my speech".chars() {
            handle_event(&mut state, key(KeyCode::Char(c)));
        }
        let actions = handle_event(&mut state, ctrl('s'));
        assert!(matches!(
            &actions[..],
            [Action::SaveScript { text }] if text == "my speech"
        ));
        assert_eq!(state.modal, Modal::None);
    }

    #[test]
    fn settings_enter_saves_both_preferences() {
        let mut state = state_with_scripts(&[]);
        handle_event(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.modal, Modal::Settings);

        handle_event(&mut state, key(KeyCode::Right)); // font 31
        handle_event(&mut state, key(KeyCode::Tab));
        handle_event(&mut state, key(KeyCode::Left)); // speed 29

        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(matches!(
            &actions[..],
            [Action::SavePreferences {
                font_size: 31,
                scroll_speed: 29,
            }]
        ));
    }

    #[test]
    fn settings_esc_discards_changes() {
        let mut state = state_with_scripts(&[]);
        handle_event(&mut state, key(KeyCode::Char('s')));
        handle_event(&mut state, key(KeyCode::Right));
        let actions = handle_event(&mut state, key(KeyCode::Esc));
        assert!(actions.is_empty());
        assert_eq!(state.prefs.font_size, 30);
    }

    #[test]
    fn delete_on_empty_list_is_a_no_op() {
        let mut state = state_with_scripts(&[]);
        let actions = handle_event(&mut state, key(KeyCode::Char('d')));
        assert!(actions.is_empty());
    }
}
