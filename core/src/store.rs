use crate::error::{CoreError, CoreResult};
use crate::ports::SelectionStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// On-disk shape of the selection state: a single optional key.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SelectionFile {
    theme: Option<String>,
}

/// File-backed [`SelectionStore`].
///
/// One TOML file holding the selected theme identifier. A missing file means
/// "no selection recorded"; clearing removes the file, so other instances
/// watching it observe the deletion as a reset. The value is written as-is,
/// unvalidated.
#[derive(Debug)]
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location
    /// (`<config dir>/swatchy/selection.toml`).
    pub fn at_default_path() -> CoreResult<Self> {
        Ok(Self::new(default_state_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Platform default path for the selection state file.
pub fn default_state_path() -> CoreResult<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        CoreError::Io(std::io::Error::new(
            ErrorKind::NotFound,
            "no per-user config directory on this platform",
        ))
    })?;
    Ok(config_dir.join("swatchy").join("selection.toml"))
}

impl SelectionStore for FileSelectionStore {
    fn load(&self) -> CoreResult<Option<String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, no selection stored", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let file: SelectionFile = toml::from_str(&text).map_err(|e| {
            CoreError::Parse(format!("failed to parse {}: {e}", self.path.display()))
        })?;
        Ok(file.theme)
    }

    fn save(&mut self, id: &str) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = SelectionFile {
            theme: Some(id.to_string()),
        };
        let text = toml::to_string(&file)
            .map_err(|e| CoreError::Parse(format!("failed to serialize selection: {e}")))?;
        fs::write(&self.path, text)?;
        log::debug!("saved selection {id:?} to {}", self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> CoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
