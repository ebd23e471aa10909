//! Password generation from fixed character classes with unbiased secure sampling.
//!
//! The core entry point is [`generate`]: it builds an [`Alphabet`](pass::Alphabet) from the
//! enabled [`CharacterClass`]es, optionally strips ambiguous glyphs, and draws each
//! character uniformly with a cryptographically secure random source.

pub mod entropy;
pub mod error;
pub mod pass;
pub mod settings;
pub mod strength;

pub use error::{GenerationError, SettingsError};
pub use pass::{CharacterClass, ClassSet, GenerationRequest, Password, generate, generate_with};
