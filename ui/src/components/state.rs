use crate::components::common::{ComponentId, Msg};
use crate::error::{AppError, AppResult};
use tuirealm::{Application, Component, MockComponent, NoUserEvent, Sub};

/// Trait for managing component lifecycle and state
pub trait ComponentState {
    /// Initialize component and prepare it for use
    fn mount(&mut self) -> AppResult<()>;
}

/// Extension trait for our Application type: mount components that implement
/// [`ComponentState`], calling `mount()` automatically first.
pub trait ComponentStateMount {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;

    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;
}

impl ComponentStateMount for Application<ComponentId, Msg, NoUserEvent> {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;
        self.mount(id, Box::new(component), subs)
            .map_err(|e| AppError::Component(e.to_string()))
    }

    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;
        self.remount(id, Box::new(component), subs)
            .map_err(|e| AppError::Component(e.to_string()))
    }
}
