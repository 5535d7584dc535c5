//! Transient text-entry state

/// State owned by one mounted search bar.
///
/// Visibility flags are derived from the stored inputs on every read, so
/// they stay consistent across mount, reconfigure, keystroke and clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    current_value: String,
    clear_enabled: bool,
    loading: bool,
}

impl InputState {
    pub fn new(value: impl Into<String>, clear_enabled: bool, loading: bool) -> Self {
        Self {
            current_value: value.into(),
            clear_enabled,
            loading,
        }
    }

    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    pub fn is_clear_button_visible(&self) -> bool {
        self.clear_enabled && !self.current_value.is_empty()
    }

    pub fn is_loading_indicator_visible(&self) -> bool {
        self.loading && self.is_clear_button_visible()
    }

    /// Owner pushed new configuration
    pub fn apply_owner(&mut self, value: impl Into<String>, clear_enabled: bool, loading: bool) {
        self.current_value = value.into();
        self.clear_enabled = clear_enabled;
        self.loading = loading;
    }

    /// User typed
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.current_value = value.into();
    }

    pub fn clear(&mut self) {
        self.current_value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_button_needs_content() {
        let mut state = InputState::new("", true, false);
        assert!(!state.is_clear_button_visible());

        state.set_value("q");
        assert!(state.is_clear_button_visible());

        state.clear();
        assert_eq!(state.current_value(), "");
        assert!(!state.is_clear_button_visible());
    }

    #[test]
    fn test_clear_button_disabled() {
        let state = InputState::new("query", false, true);
        assert!(!state.is_clear_button_visible());
        assert!(!state.is_loading_indicator_visible());
    }

    #[test]
    fn test_loading_indicator_tracks_every_transition() {
        let mut state = InputState::new("", true, true);
        assert!(!state.is_loading_indicator_visible());

        state.set_value("abc");
        assert!(state.is_loading_indicator_visible());

        state.clear();
        assert!(!state.is_loading_indicator_visible());

        state.apply_owner("abc", true, false);
        assert!(!state.is_loading_indicator_visible());

        state.apply_owner("abc", true, true);
        assert!(state.is_loading_indicator_visible());
    }
}
