use crate::error::CoreResult;

/// Durable storage for the persisted theme selection.
///
/// One optional string value under a fixed key: `None` means "no selection
/// recorded", which is distinct from an explicitly stored empty string only
/// until the next reset (resetting always clears the key). The stored value
/// is not validated.
pub trait SelectionStore {
    /// Read the persisted selection, `None` when nothing is stored.
    fn load(&self) -> CoreResult<Option<String>>;

    /// Persist a selection, overwriting any previous value.
    fn save(&mut self, id: &str) -> CoreResult<()>;

    /// Remove the persisted selection. Clearing an absent value is a no-op.
    fn clear(&mut self) -> CoreResult<()>;
}

/// The styling hook the active theme is reflected onto.
///
/// The terminal counterpart of a root element attribute: a single optional
/// value that external styling keys off of. Infallible, last write wins.
pub trait StyleHook {
    fn set(&mut self, id: &str);
    fn clear(&mut self);
    fn current(&self) -> Option<String>;
}

/// In-memory [`SelectionStore`] for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a stored selection, as if written by an earlier run.
    pub fn with_value(id: &str) -> Self {
        Self {
            value: Some(id.to_string()),
        }
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> CoreResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, id: &str) -> CoreResult<()> {
        self.value = Some(id.to_string());
        Ok(())
    }

    fn clear(&mut self) -> CoreResult<()> {
        self.value = None;
        Ok(())
    }
}

/// In-memory [`StyleHook`].
#[derive(Debug, Default)]
pub struct MemoryHook {
    value: Option<String>,
}

impl MemoryHook {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StyleHook for MemoryHook {
    fn set(&mut self, id: &str) {
        self.value = Some(id.to_string());
    }

    fn clear(&mut self) {
        self.value = None;
    }

    fn current(&self) -> Option<String> {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_none!(store.load().unwrap());

        store.save("sunrise-horizon").unwrap();
        assert_some_eq!(store.load().unwrap(), "sunrise-horizon".to_string());

        store.clear().unwrap();
        assert_none!(store.load().unwrap());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn memory_hook_last_write_wins() {
        let mut hook = MemoryHook::new();
        assert_none!(hook.current());

        hook.set("fresh-lime-green");
        hook.set("sunrise-horizon");
        assert_some_eq!(hook.current(), "sunrise-horizon".to_string());

        hook.clear();
        assert_none!(hook.current());
    }
}
