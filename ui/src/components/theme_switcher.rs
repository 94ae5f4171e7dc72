use crate::components::common::{Msg, ThemeActivityMsg};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::style;
use swatchy_core::selector::VisualState;
use swatchy_core::theme::{self, ThemeId};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Alignment, BorderType, Color, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_THEME_SELECTED: &str = "ThemeSelected";

/// One row of the switcher panel, as snapshotted from the controller.
pub type ButtonRow = (String, ThemeId, VisualState);

/// The selector panel component.
///
/// Renders one row per selector button; the active button (the one matching
/// the effective theme) is emphasized — bold, swatch-colored, marked with a
/// filled dot — while the others are dimmed. The cursor row is highlighted
/// independently of the active mark.
///
/// # Navigation
///
/// - **Up/Down or j/k** - Move the cursor
/// - **Enter** - Apply the theme under the cursor
/// - **Esc or q** - Quit
pub struct ThemeSwitcher {
    buttons: Vec<ButtonRow>,
    selected: usize,
}

impl ThemeSwitcher {
    /// Build from a controller snapshot, placing the cursor on the active
    /// button when there is one.
    pub fn new(buttons: Vec<ButtonRow>) -> Self {
        let selected = buttons
            .iter()
            .position(|(_, _, visual)| visual.is_active())
            .unwrap_or(0);
        Self { buttons, selected }
    }

    fn selected_theme(&self) -> Option<&ThemeId> {
        self.buttons.get(self.selected).map(|(_, id, _)| id)
    }

    fn row_item(&self, index: usize) -> ListItem<'_> {
        let (label, theme_id, visual) = &self.buttons[index];
        let swatch = theme::builtin(theme_id.as_str())
            .map(|t| style::hex_to_color(t.swatch.start))
            .unwrap_or(Color::Gray);

        let (mark, label_style) = if visual.is_active() {
            (
                "● ",
                Style::default().fg(swatch).add_modifier(TextModifiers::BOLD),
            )
        } else {
            ("○ ", Style::default().fg(Color::DarkGray))
        };

        let mut line = Line::from(vec![
            Span::styled(mark, Style::default().fg(swatch)),
            Span::styled(label.clone(), label_style),
        ]);
        if index == self.selected {
            line = line.style(Style::default().add_modifier(TextModifiers::REVERSED));
        }
        ListItem::new(line)
    }
}

impl MockComponent for ThemeSwitcher {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = (0..self.buttons.len()).map(|i| self.row_item(i)).collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("  Color Patterns  ")
            .title_alignment(Alignment::Center);

        let list = List::new(items).block(block);
        frame.render_widget(list, area);

        let instructions = "Up/Down/j/k: Navigate, Enter: Apply, Esc/q: Quit";
        let instruction_area = Rect {
            x: area.x,
            y: (area.y + area.height).saturating_sub(1),
            width: area.width,
            height: 1,
        };
        let instruction_widget = Paragraph::new(instructions)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(instruction_widget, instruction_area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        match self.selected_theme() {
            Some(id) => State::One(StateValue::String(id.as_str().to_string())),
            None => State::None,
        }
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ThemeSwitcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            })
            | Event::Keyboard(KeyEvent {
                code: Key::Char('j'),
                ..
            }) => {
                if self.selected + 1 < self.buttons.len() {
                    self.selected += 1;
                }
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Event::Keyboard(KeyEvent { code: Key::Up, .. })
            | Event::Keyboard(KeyEvent {
                code: Key::Char('k'),
                ..
            }) => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => match self.selected_theme() {
                Some(id) => CmdResult::Custom(
                    CMD_RESULT_THEME_SELECTED,
                    State::One(StateValue::String(id.as_str().to_string())),
                ),
                None => CmdResult::None,
            },
            Event::Keyboard(KeyEvent { code: Key::Esc, .. })
            | Event::Keyboard(KeyEvent {
                code: Key::Char('q'),
                ..
            }) => return Some(Msg::AppClose),
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_THEME_SELECTED, State::One(StateValue::String(id))) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(id)))
            }
            _ => Some(Msg::ForceRedraw),
        }
    }
}

impl ComponentState for ThemeSwitcher {
    fn mount(&mut self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ButtonRow> {
        vec![
            (
                "Sunny Breeze".to_string(),
                ThemeId::from(""),
                VisualState::Inactive,
            ),
            (
                "Fresh Lime Green".to_string(),
                ThemeId::from("fresh-lime-green"),
                VisualState::Active,
            ),
            (
                "Sunrise Horizon".to_string(),
                ThemeId::from("sunrise-horizon"),
                VisualState::Inactive,
            ),
        ]
    }

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: tuirealm::event::KeyModifiers::NONE,
        })
    }

    #[test]
    fn cursor_starts_on_the_active_button() {
        let switcher = ThemeSwitcher::new(rows());
        assert_eq!(switcher.selected, 1);
    }

    #[test]
    fn cursor_starts_at_top_when_nothing_is_active() {
        let mut no_active = rows();
        no_active[1].2 = VisualState::Inactive;
        let switcher = ThemeSwitcher::new(no_active);
        assert_eq!(switcher.selected, 0);
    }

    #[test]
    fn navigation_clamps_at_the_edges() {
        let mut switcher = ThemeSwitcher::new(rows());
        switcher.on(key(Key::Up));
        assert_eq!(switcher.selected, 0);
        switcher.on(key(Key::Up));
        assert_eq!(switcher.selected, 0);

        switcher.on(key(Key::Down));
        switcher.on(key(Key::Char('j')));
        switcher.on(key(Key::Down));
        assert_eq!(switcher.selected, 2);
    }

    #[test]
    fn enter_emits_the_selected_identifier() {
        let mut switcher = ThemeSwitcher::new(rows());
        let msg = switcher.on(key(Key::Enter));
        assert_eq!(
            msg,
            Some(Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(
                "fresh-lime-green".to_string()
            )))
        );
    }

    #[test]
    fn enter_on_the_default_button_emits_the_empty_identifier() {
        let mut switcher = ThemeSwitcher::new(rows());
        switcher.on(key(Key::Up));
        let msg = switcher.on(key(Key::Enter));
        assert_eq!(
            msg,
            Some(Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(
                String::new()
            )))
        );
    }

    #[test]
    fn escape_and_q_close_the_app() {
        let mut switcher = ThemeSwitcher::new(rows());
        assert_eq!(switcher.on(key(Key::Esc)), Some(Msg::AppClose));
        assert_eq!(switcher.on(key(Key::Char('q'))), Some(Msg::AppClose));
    }
}
