//! Password generation.

pub mod charset;
mod generate;

pub use charset::{AMBIGUOUS, Alphabet, CharacterClass, ClassSet};
pub use generate::{
    Batch, GenerationRequest, Password, from_alphabet, generate, generate_batch, generate_with,
};
