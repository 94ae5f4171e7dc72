//! Exercises the seam between the switcher component and the theme
//! controller: key events become messages, messages drive the controller,
//! and the rebuilt component reflects the new active button.

use claims::{assert_ok, assert_some_eq};
use swatchy::components::common::{Msg, ThemeActivityMsg};
use swatchy::components::theme_switcher::ThemeSwitcher;
use swatchy::style::SessionHook;
use swatchy_core::ports::StyleHook;
use swatchy_core::{EventBus, FileSelectionStore, SelectionStore, ThemeController};
use tempfile::tempdir;
use tuirealm::event::{Event, Key, KeyEvent, KeyModifiers, NoUserEvent};
use tuirealm::{Component, MockComponent, State, StateValue};

fn key(code: Key) -> Event<NoUserEvent> {
    Event::Keyboard(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
    })
}

fn controller(dir: &tempfile::TempDir) -> ThemeController<FileSelectionStore, SessionHook> {
    let store = FileSelectionStore::new(dir.path().join("selection.toml"));
    let mut c = ThemeController::new(store, SessionHook::new(), EventBus::new());
    assert_ok!(c.initialize());
    c
}

#[test]
fn selecting_a_row_applies_and_highlights_the_theme() {
    let dir = tempdir().unwrap();
    let mut controller = controller(&dir);

    // fresh start: cursor on the default button
    let mut switcher = ThemeSwitcher::new(controller.selector_snapshot());

    // move to "Sunrise Horizon" (third row) and apply
    switcher.on(key(Key::Down));
    switcher.on(key(Key::Char('j')));
    let msg = switcher.on(key(Key::Enter));
    let Some(Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(id))) = msg else {
        panic!("expected a ThemeSelected message, got {msg:?}");
    };
    assert_eq!(id, "sunrise-horizon");

    // the app layer forwards the identifier to the controller
    assert_ok!(controller.set_theme(Some(&id)));
    assert_some_eq!(controller.hook().current(), "sunrise-horizon".to_string());
    assert_some_eq!(
        controller.store().load().unwrap(),
        "sunrise-horizon".to_string()
    );

    // the rebuilt switcher highlights the applied theme and starts there
    let rebuilt = ThemeSwitcher::new(controller.selector_snapshot());
    assert_eq!(
        rebuilt.state(),
        State::One(StateValue::String("sunrise-horizon".to_string()))
    );
    let active: Vec<_> = controller
        .selector_snapshot()
        .into_iter()
        .filter(|(_, _, visual)| visual.is_active())
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].1.as_str(), "sunrise-horizon");
}

#[test]
fn selecting_the_default_row_resets() {
    let dir = tempdir().unwrap();
    let mut controller = controller(&dir);
    assert_ok!(controller.set_theme(Some("fresh-lime-green")));

    let mut switcher = ThemeSwitcher::new(controller.selector_snapshot());
    // cursor starts on the active lime row; go up to the default row
    switcher.on(key(Key::Up));
    let msg = switcher.on(key(Key::Enter));
    let Some(Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(id))) = msg else {
        panic!("expected a ThemeSelected message, got {msg:?}");
    };
    assert_eq!(id, "");

    // empty identifier means reset
    let arg = (!id.is_empty()).then_some(id.as_str());
    assert_ok!(controller.set_theme(arg));
    assert!(controller.hook().current().is_none());
    assert!(controller.store().load().unwrap().is_none());

    let snapshot = controller.selector_snapshot();
    let (_, active_id, _) = snapshot
        .iter()
        .find(|(_, _, visual)| visual.is_active())
        .expect("default button should be active");
    assert!(active_id.is_default());
}

#[test]
fn external_change_rebuild_matches_the_other_instance() {
    let dir = tempdir().unwrap();
    let mut writer = controller(&dir);
    let mut mirror = controller(&dir);

    assert_ok!(writer.set_theme(Some("fresh-lime-green")));

    // mirror instance: reload and apply without a second write
    let new_value = mirror.store().load().unwrap();
    mirror.apply_external(new_value.as_deref());

    let switcher = ThemeSwitcher::new(mirror.selector_snapshot());
    assert_eq!(
        switcher.state(),
        State::One(StateValue::String("fresh-lime-green".to_string()))
    );
    let snapshot = mirror.selector_snapshot();
    let (_, active_id, _) = snapshot
        .iter()
        .find(|(_, _, visual)| visual.is_active())
        .expect("mirrored button should be active");
    assert_eq!(active_id.as_str(), "fresh-lime-green");
}
