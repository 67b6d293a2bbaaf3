//! Search interaction state machine.
//!
//! Owns the typed query text and the visibility of the results panel. The
//! machine is pure: DOM events (input, clear, outside click, escape,
//! selection, focus) are mapped onto transitions by the search bar component.
//!
//! Invariant: the results panel is visible only while the trimmed query text
//! is non-empty and no dismissal has fired since visibility was last gained.

/// Observable phase of the search interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Empty query, panel hidden.
    Idle,
    /// Non-empty query, panel visible.
    Typing,
    /// Non-empty query retained, panel hidden by a dismissal.
    Dismissed,
}

/// State owned by the search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    results_visible: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw query text, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn phase(&self) -> SearchPhase {
        if self.results_visible {
            SearchPhase::Typing
        } else if self.query.trim().is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Dismissed
        }
    }

    /// Input change: panel visibility follows the trimmed text.
    pub fn input_changed(&mut self, value: &str) {
        self.query = value.to_string();
        self.results_visible = !value.trim().is_empty();
    }

    /// Clear action: always resets the text and hides the panel.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results_visible = false;
    }

    /// Dismissal (outside click or escape): hides the panel, text retained.
    pub fn dismiss(&mut self) {
        self.results_visible = false;
    }

    /// Item selection: the input takes the selected title, panel hidden.
    pub fn select(&mut self, title: &str) {
        self.query = title.to_string();
        self.results_visible = false;
    }

    /// Focus regained: re-show the panel if there is text to search for.
    pub fn focus_regained(&mut self) {
        if !self.query.trim().is_empty() {
            self.results_visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = SearchState::new();
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert!(!state.results_visible());
    }

    #[test]
    fn test_typing_shows_panel() {
        let mut state = SearchState::new();
        state.input_changed("phone");
        assert_eq!(state.phase(), SearchPhase::Typing);
        assert!(state.results_visible());
    }

    #[test]
    fn test_whitespace_only_input_stays_idle() {
        let mut state = SearchState::new();
        state.input_changed("   ");
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert!(!state.results_visible());
    }

    #[test]
    fn test_emptying_input_hides_panel() {
        let mut state = SearchState::new();
        state.input_changed("phone");
        state.input_changed("");
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_clear_resets_text() {
        let mut state = SearchState::new();
        state.input_changed("phone");
        state.clear();
        assert_eq!(state.query(), "");
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_dismiss_retains_text() {
        let mut state = SearchState::new();
        state.input_changed("phone");
        state.dismiss();
        assert_eq!(state.query(), "phone");
        assert!(!state.results_visible());
        assert_eq!(state.phase(), SearchPhase::Dismissed);
    }

    #[test]
    fn test_selection_populates_input_and_hides_panel() {
        let mut state = SearchState::new();
        state.input_changed("mas");
        state.select("Essence Mascara Lash Princess");
        assert_eq!(state.query(), "Essence Mascara Lash Princess");
        assert!(!state.results_visible());
    }

    #[test]
    fn test_focus_regained_reopens_panel_with_text() {
        let mut state = SearchState::new();
        state.input_changed("phone");
        state.dismiss();
        state.focus_regained();
        assert_eq!(state.phase(), SearchPhase::Typing);
    }

    #[test]
    fn test_focus_regained_does_nothing_without_text() {
        let mut state = SearchState::new();
        state.focus_regained();
        assert_eq!(state.phase(), SearchPhase::Idle);

        state.input_changed("  ");
        state.focus_regained();
        assert!(!state.results_visible());
    }

    #[test]
    fn test_visibility_implies_nonempty_trimmed_query() {
        // Walk a realistic event sequence and check the invariant after
        // every transition.
        let mut state = SearchState::new();
        let steps: Vec<Box<dyn Fn(&mut SearchState)>> = vec![
            Box::new(|s| s.input_changed("p")),
            Box::new(|s| s.input_changed("ph")),
            Box::new(|s| s.dismiss()),
            Box::new(|s| s.focus_regained()),
            Box::new(|s| s.select("Phone Case")),
            Box::new(|s| s.focus_regained()),
            Box::new(|s| s.input_changed(" ")),
            Box::new(|s| s.clear()),
        ];
        for step in steps {
            step(&mut state);
            if state.results_visible() {
                assert!(!state.query().trim().is_empty());
            }
        }
    }
}
