use crate::components::common::{ComponentId, Msg, ThemeActivityMsg};
use crate::components::state::ComponentStateMount;
use crate::components::text_label::TextLabel;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::error::{AppError, AppResult};
use crate::style::{self, SessionHook};
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::time::Duration;
use swatchy_core::watch::SelectionWatcher;
use swatchy_core::{EventBus, FileSelectionStore, SelectionStore, ThemeController, ThemeEvent};
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg};

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    /// All theme state: hook, persisted selection, selector panel
    pub controller: ThemeController<FileSelectionStore, SessionHook>,
    /// Same-process theme change notifications
    pub bus_rx: Receiver<ThemeEvent>,
    /// Watches the state file for writes by other instances
    pub watcher: SelectionWatcher,
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new(state_path: &Path) -> AppResult<Self> {
        let bus = EventBus::new();
        let bus_rx = bus.subscribe();

        let store = FileSelectionStore::new(state_path);
        let mut controller = ThemeController::new(store, SessionHook::new(), bus);
        controller.initialize().map_err(AppError::from)?;

        let watcher = SelectionWatcher::new(state_path).map_err(AppError::from)?;
        // our own initialize may have re-persisted the selection; swallow
        // that first wake so startup does not mirror itself
        watcher.has_changed();

        let mut model = Self {
            app: Self::init_app()?,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            controller,
            bus_rx,
            watcher,
        };
        model.remount_switcher()?;
        model.remount_status_label()?;
        Ok(model)
    }

    fn init_app() -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 3)
                .poll_timeout(Duration::from_millis(10))
                .tick_interval(Duration::from_millis(100)),
        );
        Ok(app)
    }
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Rebuild the switcher from a fresh controller snapshot and focus it.
    pub fn remount_switcher(&mut self) -> AppResult<()> {
        let switcher = ThemeSwitcher::new(self.controller.selector_snapshot());
        self.app
            .remount_with_state(ComponentId::ThemeSwitcher, switcher, Vec::default())?;
        self.app
            .active(&ComponentId::ThemeSwitcher)
            .map_err(|e| AppError::Component(e.to_string()))?;
        Ok(())
    }

    /// Rebuild the status line showing the effective theme.
    pub fn remount_status_label(&mut self) -> AppResult<()> {
        let effective = self.controller.effective_theme();
        let palette = style::palette_for(&effective);
        let name = match swatchy_core::theme::builtin(&effective) {
            Some(theme) => theme.display_name.to_string(),
            None if effective == swatchy_core::theme::DEFAULT_MARKER => {
                swatchy_core::theme::default_theme().display_name.to_string()
            }
            None => effective.clone(),
        };
        let label = TextLabel::new(format!("Swatchy — {name}"), palette.accent);
        self.app
            .remount(ComponentId::StatusLabel, Box::new(label), Vec::default())
            .map_err(|e| AppError::Component(e.to_string()))?;
        Ok(())
    }

    /// Poll the state file watcher; a change made by another instance
    /// becomes an `ExternalChange` message carrying the new value.
    pub fn poll_external_change(&mut self) -> Option<Msg> {
        if !self.watcher.has_changed() {
            return None;
        }
        match self.controller.store().load() {
            Ok(new_value) => Some(Msg::ThemeActivity(ThemeActivityMsg::ExternalChange(
                new_value,
            ))),
            Err(e) => {
                log::warn!("failed to reload selection after external change: {e}");
                None
            }
        }
    }

    /// Drain same-process theme events; each one only refreshes visuals,
    /// the originator already updated hook and store.
    pub fn drain_bus(&mut self) {
        let events: Vec<ThemeEvent> = self.bus_rx.try_iter().collect();
        for event in &events {
            self.controller.handle_event(event);
        }
    }
}
