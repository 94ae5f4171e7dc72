use tui_realm_stdlib::Label;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    props::{Alignment, Color, TextModifiers},
};

use crate::components::common::Msg;

/// Status line showing the name of the active theme.
#[derive(MockComponent)]
pub struct TextLabel {
    component: Label,
}

impl TextLabel {
    pub fn new(text: String, accent: Color) -> Self {
        let component = Label::default()
            .text(text)
            .alignment(Alignment::Center)
            .foreground(accent)
            .background(Color::Reset)
            .modifiers(TextModifiers::BOLD);

        Self { component }
    }
}

impl Component<Msg, NoUserEvent> for TextLabel {
    fn on(&mut self, _: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
