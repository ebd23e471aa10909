//! Character classes and alphabet construction.

use std::fmt;

use crate::error::GenerationError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Visually confusable glyphs removed by ambiguous exclusion.
pub const AMBIGUOUS: [u8; 5] = [b'I', b'l', b'1', b'O', b'0'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Canonical order used for alphabet layout.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub const fn chars(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CharacterClass::Upper => "Uppercase",
            CharacterClass::Lower => "Lowercase",
            CharacterClass::Digit => "Numbers",
            CharacterClass::Symbol => "Symbols",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Upper => "upper",
            CharacterClass::Lower => "lower",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Set of enabled character classes. Iteration follows [`CharacterClass::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub const fn with(self, class: CharacterClass) -> Self {
        ClassSet(self.0 | class.bit())
    }

    pub const fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.0 |= class.bit();
        } else {
            self.0 &= !class.bit();
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        iter.into_iter().fold(ClassSet::empty(), ClassSet::with)
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        f.write_str(&names.join("+"))
    }
}

/// Ordered pool of ASCII characters eligible for sampling. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<u8>);

impl Alphabet {
    /// Concatenate the enabled classes in canonical order, then strip
    /// ambiguous glyphs if requested.
    pub fn build(classes: ClassSet, exclude_ambiguous: bool) -> Result<Self, GenerationError> {
        if classes.is_empty() {
            return Err(GenerationError::NoClassSelected);
        }

        let mut chars: Vec<u8> = Vec::new();
        for class in classes.iter() {
            chars.extend(class.chars().bytes());
        }

        if exclude_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(c));
        }

        if chars.is_empty() {
            return Err(GenerationError::EmptyAlphabet);
        }

        Ok(Alphabet(chars))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("")
    }
}

/// Effective alphabet size for the given options, zero when nothing is enabled.
pub fn size(classes: ClassSet, exclude_ambiguous: bool) -> usize {
    classes
        .iter()
        .flat_map(|class| class.chars().bytes())
        .filter(|c| !exclude_ambiguous || !AMBIGUOUS.contains(c))
        .count()
}
