use crate::app::model::Model;
use crate::components::common::ComponentId;
use crate::error::AppResult;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let _ = self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(1), // Status label
                        Constraint::Length(1),
                        Constraint::Min(7), // Switcher panel
                    ]
                    .as_ref(),
                )
                .split(f.area());

            self.app.view(&ComponentId::StatusLabel, f, chunks[0]);
            self.app.view(&ComponentId::ThemeSwitcher, f, chunks[2]);
        });

        Ok(())
    }
}
