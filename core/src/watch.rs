//! Selection file watcher — detects changes made by other running instances.
//!
//! notify::RecommendedWatcher runs callbacks on an internal thread.
//! SelectionWatcher bridges change notifications to the host's event loop
//! via mpsc::channel; the host reloads the store and mirrors the new value
//! through `ThemeController::apply_external`.

use crate::error::CoreResult;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

pub struct SelectionWatcher {
    rx: mpsc::Receiver<()>,
    _watcher: RecommendedWatcher, // Drop stops watching
}

impl SelectionWatcher {
    /// Watch the selection file at `path` for external writes and removals.
    ///
    /// The file may not exist yet (nothing stored), and on Linux inotify
    /// loses a file watch on rename or delete, so the parent directory is
    /// watched (NonRecursive) and events are filtered by path.
    pub fn new(path: &Path) -> CoreResult<Self> {
        let parent = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&parent)?;

        let target = path.to_path_buf();
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    let relevant = event.paths.iter().any(|p| p == &target)
                        && (event.kind.is_create()
                            || event.kind.is_modify()
                            || event.kind.is_remove());
                    if relevant {
                        let _ = tx.send(());
                    }
                }
            },
            notify::Config::default(),
        )?;
        watcher.watch(&parent, RecursiveMode::NonRecursive)?;
        log::debug!("watching {} for external changes", path.display());

        Ok(Self {
            rx,
            _watcher: watcher,
        })
    }

    /// Return true if the selection file changed since the last check
    /// (non-blocking). Multiple queued notifications collapse into one.
    pub fn has_changed(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}
