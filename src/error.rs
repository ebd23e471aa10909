use thiserror::Error;

/// Local validation failures, all detected before any random draw.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Select at least one character class")]
    NoClassSelected,

    #[error("No characters left to choose from after excluding ambiguous characters")]
    EmptyAlphabet,

    #[error("Password length must be at least 1")]
    InvalidLength,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings field `{field}`: {value:?}")]
    Malformed { field: &'static str, value: String },
}
