use crate::config::AppConfig;
use crate::prompter::ScrollController;
use crate::store::prefs::{
    Preferences, FONT_SIZE_MAX, FONT_SIZE_MIN, SCROLL_SPEED_MAX, SCROLL_SPEED_MIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Prompter,
}

/// Modal dialogs layered over the home screen. A visible modal captures
/// all input; at most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    None,
    AddScript,
    Settings,
}

/// Multiline text editor for the add-script dialog. `col` is a byte index
/// into the current line; movement snaps to char boundaries.
#[derive(Debug)]
pub struct EditorState {
    pub lines: Vec<String>,
    pub row: usize,
    pub col: usize,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    pub fn reset(&mut self) {
        self.lines = vec![String::new()];
        self.row = 0;
        self.col = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn insert_char(&mut self, c: char) {
        self.lines[self.row].insert(self.col, c);
        self.col += c.len_utf8();
    }

    pub fn newline(&mut self) {
        let rest = self.lines[self.row].split_off(self.col);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            let prev = self.lines[self.row][..self.col]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.lines[self.row].drain(prev..self.col);
            self.col = prev;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].len();
            self.lines[self.row].push_str(&current);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col = self.lines[self.row][..self.col]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.lines[self.row].len();
        }
    }

    pub fn move_right(&mut self) {
        let line = &self.lines[self.row];
        if self.col < line.len() {
            self.col = line[self.col..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.col + i)
                .unwrap_or(line.len());
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.snap_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.snap_col();
        }
    }

    fn snap_col(&mut self) {
        let line = &self.lines[self.row];
        let mut col = self.col.min(line.len());
        while col > 0 && !line.is_char_boundary(col) {
            col -= 1;
        }
        self.col = col;
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    FontSize,
    ScrollSpeed,
}

/// Working copy of the two preferences while the settings dialog is open.
/// Nothing is persisted until the dialog is dismissed with save.
#[derive(Debug)]
pub struct SettingsState {
    pub font_size: u16,
    pub scroll_speed: u16,
    pub field: SettingsField,
}

impl SettingsState {
    pub fn from_prefs(prefs: Preferences) -> Self {
        Self {
            font_size: prefs.font_size,
            scroll_speed: prefs.scroll_speed,
            field: SettingsField::FontSize,
        }
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            SettingsField::FontSize => SettingsField::ScrollSpeed,
            SettingsField::ScrollSpeed => SettingsField::FontSize,
        };
    }

    /// Step the selected slider, clamped to its range.
    pub fn adjust(&mut self, delta: i16) {
        match self.field {
            SettingsField::FontSize => {
                self.font_size = step(self.font_size, delta, FONT_SIZE_MIN, FONT_SIZE_MAX);
            }
            SettingsField::ScrollSpeed => {
                self.scroll_speed =
                    step(self.scroll_speed, delta, SCROLL_SPEED_MIN, SCROLL_SPEED_MAX);
            }
        }
    }
}

fn step(value: u16, delta: i16, min: u16, max: u16) -> u16 {
    value.saturating_add_signed(delta).clamp(min, max)
}

/// The prompter screen. Carries the literal script text it was opened with;
/// there is no way to look a script up from here.
#[derive(Debug)]
pub struct PrompterState {
    pub text: String,
    pub controller: ScrollController,
    pub font_size: u16,
    pub mirror: bool,
}

pub struct AppState {
    pub config: AppConfig,
    pub scripts: Vec<String>,
    pub selected: usize,
    pub screen: Screen,
    pub modal: Modal,
    pub editor: EditorState,
    pub settings: SettingsState,
    pub prefs: Preferences,
    pub prompter: Option<PrompterState>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let prefs = Preferences::default();
        Self {
            config,
            scripts: Vec::new(),
            selected: 0,
            screen: Screen::Home,
            modal: Modal::None,
            editor: EditorState::new(),
            settings: SettingsState::from_prefs(prefs),
            prefs,
            prompter: None,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Replace the in-memory list (after a store read or write), keeping
    /// the selection in bounds.
    pub fn set_scripts(&mut self, scripts: Vec<String>) {
        self.scripts = scripts;
        if self.selected >= self.scripts.len() {
            self.selected = self.scripts.len().saturating_sub(1);
        }
        self.dirty = true;
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.scripts.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    pub fn selected_script(&self) -> Option<&String> {
        self.scripts.get(self.selected)
    }

    /// Open the prompter with the literal text of a script. Starts Paused.
    pub fn open_prompter(&mut self, text: String) {
        self.prompter = Some(PrompterState {
            text,
            controller: ScrollController::new(self.prefs.scroll_speed),
            font_size: self.prefs.font_size,
            mirror: self.config.ui.mirror,
        });
        self.screen = Screen::Prompter;
        self.dirty = true;
    }

    /// Tear down the prompter screen. Returns whether the controller was
    /// still Running, in which case the caller must disarm the timer.
    pub fn close_prompter(&mut self) -> bool {
        let was_running = self
            .prompter
            .as_ref()
            .map(|p| p.controller.is_running())
            .unwrap_or(false);
        self.prompter = None;
        self.screen = Screen::Home;
        self.dirty = true;
        was_running
    }

    pub fn status(&mut self, text: impl Into<String>) {
        self.status_message = Some(text.into());
        self.dirty = true;
    }

    pub fn error_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::warn!(%text, "surfaced error");
        self.status_message = Some(text);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_multiline_editing() {
        let mut ed = EditorState::new();
        for c in "hello".chars() {
            ed.insert_char(c);
        }
        ed.newline();
        for c in "world".chars() {
            ed.insert_char(c);
        }
        assert_eq!(ed.text(), "hello\nworld");

        ed.backspace(); // "worl"
        ed.move_up();
        ed.move_down();
        assert_eq!(ed.text(), "hello\nworl");
    }

    #[test]
    fn editor_backspace_joins_lines() {
        let mut ed = EditorState::new();
        ed.insert_char('a');
        ed.newline();
        ed.insert_char('b');
        ed.move_left(); // col 0 of line 1
        ed.backspace();
        assert_eq!(ed.text(), "ab");
        assert_eq!(ed.row, 0);
        assert_eq!(ed.col, 1);
    }

    #[test]
    fn editor_snaps_to_char_boundaries_on_vertical_moves() {
        let mut ed = EditorState::new();
        for c in "héllo".chars() {
            ed.insert_char(c);
        }
        ed.newline();
        ed.insert_char('x');
        ed.move_up();
        // col clamped onto a boundary of "héllo"
        assert!(ed.lines[ed.row].is_char_boundary(ed.col));
    }

    #[test]
    fn settings_adjust_clamps_to_range() {
        let mut s = SettingsState::from_prefs(Preferences::default());
        for _ in 0..200 {
            s.adjust(1);
        }
        assert_eq!(s.font_size, FONT_SIZE_MAX);
        s.toggle_field();
        for _ in 0..200 {
            s.adjust(-1);
        }
        assert_eq!(s.scroll_speed, SCROLL_SPEED_MIN);
    }

    #[test]
    fn deleting_last_script_pulls_selection_back() {
        let mut state = AppState::new(AppConfig::default());
        state.set_scripts(vec!["a".into(), "b".into(), "c".into()]);
        state.selected = 2;
        state.set_scripts(vec!["a".into(), "b".into()]);
        assert_eq!(state.selected, 1);
    }
}
