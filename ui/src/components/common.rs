use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    StatusLabel,
    ThemeSwitcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    ThemeActivity(ThemeActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum ThemeActivityMsg {
    /// The user activated a selector button; the identifier may be empty
    /// (reset to default) or unknown (applied as-is).
    ThemeSelected(String),
    /// Another running instance changed the shared selection; `None` means
    /// the selection was cleared.
    ExternalChange(Option<String>),
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
