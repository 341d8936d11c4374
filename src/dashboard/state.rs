//! View State
//!
//! Owns the active section. Selecting a section replaces it; the next render
//! reads it back through the router.

use super::layout::Layout;
use super::router::route;
use super::section::Section;

/// The single piece of mutable dashboard state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    active: Section,
}

impl ViewState {
    /// Start on the default section (overview)
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a specific section
    pub fn with_section(section: Section) -> Self {
        Self { active: section }
    }

    /// Currently selected section
    pub fn active(&self) -> Section {
        self.active
    }

    /// Replace the selection. Returns `true` if it changed.
    pub fn select_section(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        if changed {
            tracing::debug!(section = %section, "Section selected");
        }
        changed
    }

    /// Select by raw identifier
    ///
    /// Unknown identifiers leave the selection untouched and return `None`.
    pub fn select_by_id(&mut self, id: &str) -> Option<Section> {
        match id.parse::<Section>() {
            Ok(section) => {
                self.select_section(section);
                Some(section)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring section selection");
                None
            }
        }
    }

    /// Layout for the active section
    pub fn layout(&self) -> Layout {
        route(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_section_is_overview() {
        let state = ViewState::new();
        assert_eq!(state.active(), Section::Overview);
        assert_eq!(state.layout().section, Section::Overview);
    }

    #[test]
    fn test_select_every_section() {
        let mut state = ViewState::new();
        for section in Section::all() {
            state.select_section(*section);
            assert_eq!(state.active(), *section);
        }
    }

    #[test]
    fn test_repeated_selection_is_idempotent() {
        let mut state = ViewState::new();
        assert!(state.select_section(Section::Demographic));
        let first = state.layout();
        assert!(!state.select_section(Section::Demographic));
        assert_eq!(state.layout(), first);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut state = ViewState::with_section(Section::Biometric);
        assert_eq!(state.select_by_id("settings"), None);
        assert_eq!(state.active(), Section::Biometric);
        assert_eq!(state.select_by_id("enrollment"), Some(Section::Enrollment));
        assert_eq!(state.active(), Section::Enrollment);
    }

    #[test]
    fn test_biometric_then_comparison() {
        let mut state = ViewState::new();
        state.select_section(Section::Biometric);
        state.select_section(Section::Comparison);

        let layout = state.layout();
        assert_eq!(layout.section, Section::Comparison);
        let overview_titles = route(Section::Overview).panel_titles();
        assert!(layout
            .panel_titles()
            .iter()
            .all(|title| !overview_titles.contains(title)));
    }
}
