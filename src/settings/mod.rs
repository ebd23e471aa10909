//! Persisted generation defaults.

mod file;

use std::path::Path;

use crate::error::SettingsError;
use crate::pass::{ClassSet, GenerationRequest};

pub use file::default_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub exclude_ambiguous: bool,
    pub show_strength: bool,
}

impl Settings {
    /// Shortest length offered by the interactive form.
    pub const MIN_INTERACTIVE_LENGTH: usize = 4;
    /// Longest length offered by the interactive form.
    pub const MAX_INTERACTIVE_LENGTH: usize = 64;

    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&default_path())
    }

    /// Load settings, creating the file with defaults if it is missing.
    /// A malformed file is replaced with defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        match file::load(path) {
            Ok(settings) => Ok(settings),
            Err(SettingsError::Malformed { field, value }) => {
                log::warn!(
                    "settings field `{field}` is malformed ({value:?}), resetting {}",
                    path.display()
                );
                let settings = Settings::default();
                file::save(&settings, path)?;
                Ok(settings)
            }
            Err(e) => Err(e),
        }
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes, self.exclude_ambiguous)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            classes: ClassSet::all(),
            exclude_ambiguous: false,
            show_strength: false,
        }
    }
}
