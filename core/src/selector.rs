use crate::theme::{self, ThemeId};

/// Visual rendition of a selector button.
///
/// Exactly two fixed states: the active button is drawn at full opacity with
/// a slight scale emphasis, every other button is dimmed at normal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Active,
    Inactive,
}

impl VisualState {
    pub fn is_active(self) -> bool {
        matches!(self, VisualState::Active)
    }

    pub fn opacity(self) -> f32 {
        match self {
            VisualState::Active => 1.0,
            VisualState::Inactive => 0.7,
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            VisualState::Active => 1.05,
            VisualState::Inactive => 1.0,
        }
    }
}

/// One theme-selector button: the identifier it selects plus its label and
/// current visual state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorButton {
    pub theme_id: ThemeId,
    pub label: String,
    pub visual: VisualState,
}

impl SelectorButton {
    pub fn new(theme_id: impl Into<ThemeId>, label: impl Into<String>) -> Self {
        Self {
            theme_id: theme_id.into(),
            label: label.into(),
            visual: VisualState::Inactive,
        }
    }
}

/// Registry of theme-selector buttons.
///
/// Hosts may register their own buttons before the controller initializes;
/// when none exist, the controller installs the default panel (one button
/// per builtin theme) exactly once.
#[derive(Debug, Default)]
pub struct SelectorPanel {
    buttons: Vec<SelectorButton>,
}

impl SelectorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, button: SelectorButton) {
        self.buttons.push(button);
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn buttons(&self) -> &[SelectorButton] {
        &self.buttons
    }

    /// The currently active button, if any. Unknown effective themes match
    /// no button, leaving all of them inactive.
    pub fn active(&self) -> Option<&SelectorButton> {
        self.buttons.iter().find(|b| b.visual.is_active())
    }

    /// Install one button per builtin theme, default first.
    pub fn install_default_panel(&mut self) {
        for theme in theme::THEMES {
            self.register(SelectorButton::new(theme.id, theme.display_name));
        }
    }

    /// Recompute every button's visual state from the effective theme.
    ///
    /// `effective` is the styling hook value, or the default marker when the
    /// hook is unset. Pure and idempotent: the result depends only on the
    /// arguments, never on the previous render.
    pub fn refresh(&mut self, effective: &str) {
        for button in &mut self.buttons {
            let is_active = (effective == theme::DEFAULT_MARKER
                && button.theme_id.is_default())
                || effective == button.theme_id.as_str();
            button.visual = if is_active {
                VisualState::Active
            } else {
                VisualState::Inactive
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_MARKER;

    fn default_panel() -> SelectorPanel {
        let mut panel = SelectorPanel::new();
        panel.install_default_panel();
        panel
    }

    #[test]
    fn default_panel_has_one_button_per_builtin_theme() {
        let panel = default_panel();
        assert_eq!(panel.buttons().len(), 3);
        assert!(panel.buttons()[0].theme_id.is_default());
        assert_eq!(panel.buttons()[0].label, "Sunny Breeze");
    }

    #[test]
    fn refresh_marks_exactly_the_matching_button_active() {
        let mut panel = default_panel();
        panel.refresh("fresh-lime-green");

        let active: Vec<_> = panel
            .buttons()
            .iter()
            .filter(|b| b.visual.is_active())
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].theme_id.as_str(), "fresh-lime-green");
    }

    #[test]
    fn default_marker_activates_the_empty_id_button() {
        let mut panel = default_panel();
        panel.refresh(DEFAULT_MARKER);

        let active = panel.active().expect("default button should be active");
        assert!(active.theme_id.is_default());
    }

    #[test]
    fn unknown_theme_leaves_all_buttons_inactive() {
        let mut panel = default_panel();
        panel.refresh("midnight-violet");
        assert!(panel.active().is_none());
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut panel = default_panel();
        panel.refresh("sunrise-horizon");
        let once: Vec<_> = panel.buttons().to_vec();
        panel.refresh("sunrise-horizon");
        assert_eq!(panel.buttons(), once.as_slice());
    }

    #[test]
    fn visual_state_constants() {
        assert_eq!(VisualState::Active.opacity(), 1.0);
        assert_eq!(VisualState::Active.scale(), 1.05);
        assert_eq!(VisualState::Inactive.opacity(), 0.7);
        assert_eq!(VisualState::Inactive.scale(), 1.0);
    }

    #[test]
    fn refresh_over_empty_panel_is_a_no_op() {
        let mut panel = SelectorPanel::new();
        panel.refresh("sunrise-horizon");
        assert!(panel.is_empty());
        assert!(panel.active().is_none());
    }
}
