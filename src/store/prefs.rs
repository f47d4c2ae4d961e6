//! Persisted numeric preferences: font size and scrolling speed.
//!
//! Both are stored as stringified integers under their own store keys and
//! parsed back on load. Out-of-range values are clamped and unparseable
//! values fall back to the default, so a hand-edited store file can never
//! produce an unusable setting.

use super::{Result, ScriptStore, FONT_SIZE_KEY, SCROLLING_SPEED_KEY};

pub const FONT_SIZE_MIN: u16 = 20;
pub const FONT_SIZE_MAX: u16 = 100;
pub const FONT_SIZE_DEFAULT: u16 = 30;

pub const SCROLL_SPEED_MIN: u16 = 2;
pub const SCROLL_SPEED_MAX: u16 = 100;
pub const SCROLL_SPEED_DEFAULT: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub font_size: u16,
    pub scroll_speed: u16,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            scroll_speed: SCROLL_SPEED_DEFAULT,
        }
    }
}

impl Preferences {
    /// Read both preferences from the store, substituting defaults for
    /// missing or unparseable values.
    pub fn load(store: &ScriptStore) -> Result<Self> {
        let font_size = parse_clamped(
            store.get_value(FONT_SIZE_KEY)?,
            FONT_SIZE_MIN,
            FONT_SIZE_MAX,
            FONT_SIZE_DEFAULT,
        );
        let scroll_speed = parse_clamped(
            store.get_value(SCROLLING_SPEED_KEY)?,
            SCROLL_SPEED_MIN,
            SCROLL_SPEED_MAX,
            SCROLL_SPEED_DEFAULT,
        );
        Ok(Self {
            font_size,
            scroll_speed,
        })
    }

    /// Write both preferences to the store.
    pub fn save(&self, store: &ScriptStore) -> Result<()> {
        store.set_value(FONT_SIZE_KEY, &self.font_size.to_string())?;
        store.set_value(SCROLLING_SPEED_KEY, &self.scroll_speed.to_string())?;
        Ok(())
    }
}

fn parse_clamped(raw: Option<String>, min: u16, max: u16, default: u16) -> u16 {
    raw.and_then(|s| s.trim().parse::<u16>().ok())
        .map(|v| v.clamp(min, max))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ScriptStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ScriptStore::open(dir.path().join("store")).unwrap();
        (dir, store)
    }

    #[test]
    fn defaults_when_nothing_stored() {
        let (_dir, store) = temp_store();
        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.font_size, 30);
        assert_eq!(prefs.scroll_speed, 30);
    }

    #[test]
    fn round_trip() {
        let (_dir, store) = temp_store();
        let prefs = Preferences {
            font_size: 42,
            scroll_speed: 7,
        };
        prefs.save(&store).unwrap();
        assert_eq!(store.get_value(FONT_SIZE_KEY).unwrap().as_deref(), Some("42"));
        assert_eq!(Preferences::load(&store).unwrap(), prefs);
    }

    #[test]
    fn stored_values_are_clamped_on_load() {
        let (_dir, store) = temp_store();
        store.set_value(FONT_SIZE_KEY, "500").unwrap();
        store.set_value(SCROLLING_SPEED_KEY, "1").unwrap();
        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.font_size, FONT_SIZE_MAX);
        assert_eq!(prefs.scroll_speed, SCROLL_SPEED_MIN);
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let (_dir, store) = temp_store();
        store.set_value(FONT_SIZE_KEY, "huge").unwrap();
        store.set_value(SCROLLING_SPEED_KEY, "-3").unwrap();
        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs, Preferences::default());
    }
}
