use crate::bus::{EventBus, ThemeEvent};
use crate::error::CoreResult;
use crate::ports::{SelectionStore, StyleHook};
use crate::selector::{SelectorButton, SelectorPanel, VisualState};
use crate::theme::{DEFAULT_MARKER, ThemeId};

/// The theme controller.
///
/// Owns the styling hook, the persisted selection and the selector panel,
/// and keeps the three in agreement after every operation. Change
/// notifications for other listeners in the same process go out on the
/// [`EventBus`]; changes made by other processes arrive through
/// [`apply_external`](Self::apply_external).
pub struct ThemeController<S, H>
where
    S: SelectionStore,
    H: StyleHook,
{
    store: S,
    hook: H,
    panel: SelectorPanel,
    bus: EventBus,
}

impl<S, H> ThemeController<S, H>
where
    S: SelectionStore,
    H: StyleHook,
{
    pub fn new(store: S, hook: H, bus: EventBus) -> Self {
        Self {
            store,
            hook,
            panel: SelectorPanel::new(),
            bus,
        }
    }

    /// Register a host-supplied selector button. Registering at least one
    /// button before [`initialize`](Self::initialize) suppresses the default
    /// panel.
    pub fn register_button(&mut self, button: SelectorButton) {
        self.panel.register(button);
    }

    /// Apply a theme and persist the choice.
    ///
    /// A non-empty identifier is applied to the hook and saved; `None` or
    /// the empty identifier resets to the default theme, clearing both. The
    /// identifier is not validated: unknown values are stored and applied
    /// as-is and simply match no button. The change is published on the bus
    /// for other same-process listeners.
    ///
    /// The hook is updated before the store, so a failed store write leaves
    /// the hook already switched; callers see the error and the next action
    /// reconciles the pair.
    pub fn set_theme(&mut self, id: Option<&str>) -> CoreResult<()> {
        match id {
            Some(t) if !t.is_empty() => {
                self.hook.set(t);
                self.store.save(t)?;
                log::info!("theme switched to {t}");
                self.bus
                    .publish(ThemeEvent::Changed(Some(ThemeId::from(t))));
            }
            _ => {
                self.hook.clear();
                self.store.clear()?;
                log::info!("theme reset to default");
                self.bus.publish(ThemeEvent::Changed(None));
            }
        }
        self.refresh_selectors();
        Ok(())
    }

    /// Recompute every selector button's visual state from the current
    /// effective theme. Pure re-render, safe to call at any time.
    pub fn refresh_selectors(&mut self) {
        let effective = self.effective_theme();
        self.panel.refresh(&effective);
    }

    /// One-time startup: install the default panel if the host registered no
    /// buttons, then replay the persisted selection.
    ///
    /// A stored value is re-applied through [`set_theme`](Self::set_theme)
    /// (idempotent re-persist); with nothing stored only the visuals are
    /// refreshed.
    pub fn initialize(&mut self) -> CoreResult<()> {
        if self.panel.is_empty() {
            self.panel.install_default_panel();
            log::debug!("no selector buttons registered, installed default panel");
        }
        match self.store.load()? {
            Some(saved) => self.set_theme(Some(&saved)),
            None => {
                self.refresh_selectors();
                Ok(())
            }
        }
    }

    /// Mirror a change made by another process into this one.
    ///
    /// Only the hook and the visuals are touched: the store already holds
    /// the new value (the other process wrote it) and re-publishing on the
    /// bus would announce a change this process did not make.
    pub fn apply_external(&mut self, new_value: Option<&str>) {
        match new_value {
            Some(t) if !t.is_empty() => self.hook.set(t),
            _ => self.hook.clear(),
        }
        log::debug!("mirrored external theme change: {new_value:?}");
        self.refresh_selectors();
    }

    /// React to a same-process change announced by another controller. The
    /// originator already updated hook and store; only visuals need care.
    pub fn handle_event(&mut self, event: &ThemeEvent) {
        let ThemeEvent::Changed(_) = event;
        self.refresh_selectors();
    }

    /// The effective theme: the hook value, or the default marker when the
    /// hook is unset.
    pub fn effective_theme(&self) -> String {
        self.hook
            .current()
            .unwrap_or_else(|| DEFAULT_MARKER.to_string())
    }

    /// Snapshot of the panel for renderers: label, identifier and visual
    /// state per button.
    pub fn selector_snapshot(&self) -> Vec<(String, ThemeId, VisualState)> {
        self.panel
            .buttons()
            .iter()
            .map(|b| (b.label.clone(), b.theme_id.clone(), b.visual))
            .collect()
    }

    pub fn panel(&self) -> &SelectorPanel {
        &self.panel
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
