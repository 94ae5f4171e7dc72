use crate::app::model::Model;
use crate::components::common::{Msg, ThemeActivityMsg};
use tuirealm::Update;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::ThemeSelected(id) => self.handle_theme_selected(id),
            ThemeActivityMsg::ExternalChange(new_value) => self.handle_external_change(new_value),
        }
    }

    fn handle_theme_selected(&mut self, id: String) -> Option<Msg> {
        log::info!("Applying selected theme: {id:?}");

        // the empty identifier is the reset button
        let arg = (!id.is_empty()).then_some(id.as_str());
        if let Err(e) = self.controller.set_theme(arg) {
            log::error!("Failed to apply theme: {e}");
            return Some(Msg::Error(e.into()));
        }

        self.drain_bus();
        if let Err(e) = self.remount_switcher() {
            return Some(Msg::Error(e));
        }
        if let Err(e) = self.remount_status_label() {
            return Some(Msg::Error(e));
        }
        Some(Msg::ForceRedraw)
    }

    fn handle_external_change(&mut self, new_value: Option<String>) -> Option<Msg> {
        log::info!("Mirroring external theme change: {new_value:?}");

        self.controller.apply_external(new_value.as_deref());
        if let Err(e) = self.remount_switcher() {
            return Some(Msg::Error(e));
        }
        if let Err(e) = self.remount_status_label() {
            return Some(Msg::Error(e));
        }
        Some(Msg::ForceRedraw)
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.redraw = true;
        match msg? {
            Msg::AppClose => {
                self.quit = true;
                None
            }
            Msg::ForceRedraw => None,
            Msg::ThemeActivity(theme_msg) => self.update_theme(theme_msg),
            Msg::Error(e) => {
                log::error!("{e}");
                None
            }
        }
    }
}
