#[derive(Debug)]
pub enum Action {
    /// Append a script to the store and refresh the list.
    SaveScript { text: String },
    /// Delete the script at the given list index.
    DeleteScript { index: usize },
    /// Persist both preferences (settings dialog dismissed with save).
    SavePreferences { font_size: u16, scroll_speed: u16 },
    /// Arm the scroll tick timer (controller entered Running).
    StartScrolling,
    /// Disarm the scroll tick timer (controller left Running).
    StopScrolling,
    Quit,
}
