//! Password generation.

use std::fmt;
use std::ops::Deref;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::charset::{Alphabet, ClassSet};
use crate::entropy::uniform_index;
use crate::error::GenerationError;

/// Inputs for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
    pub exclude_ambiguous: bool,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet, exclude_ambiguous: bool) -> Self {
        Self {
            length,
            classes,
            exclude_ambiguous,
        }
    }

    /// Validate the request and build its alphabet. An empty class set is
    /// reported before the length.
    pub fn alphabet(&self) -> Result<Alphabet, GenerationError> {
        let alphabet = Alphabet::build(self.classes, self.exclude_ambiguous)?;
        if self.length == 0 {
            return Err(GenerationError::InvalidLength);
        }
        Ok(alphabet)
    }
}

/// Generated password. The buffer is wiped on drop.
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

/// Generate one password using the operating system's CSPRNG.
pub fn generate(request: &GenerationRequest) -> Result<Password, GenerationError> {
    generate_with(request, &mut OsRng)
}

/// Generate one password from the given secure random source.
pub fn generate_with<R>(request: &GenerationRequest, rng: &mut R) -> Result<Password, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let alphabet = request.alphabet()?;
    Ok(from_alphabet(&alphabet, request.length, rng))
}

/// Lazily generated passwords sharing one alphabet. Each password is wiped
/// when the caller drops it, so only one needs to be alive at a time.
pub struct Batch<'r, R: ?Sized> {
    alphabet: Alphabet,
    length: usize,
    remaining: usize,
    rng: &'r mut R,
}

impl<R> Iterator for Batch<'_, R>
where
    R: RngCore + CryptoRng + ?Sized,
{
    type Item = Password;

    fn next(&mut self) -> Option<Password> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(from_alphabet(&self.alphabet, self.length, &mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for Batch<'_, R> where R: RngCore + CryptoRng + ?Sized {}

/// Validate once and yield `count` passwords from one alphabet.
pub fn generate_batch<'r, R>(
    request: &GenerationRequest,
    count: usize,
    rng: &'r mut R,
) -> Result<Batch<'r, R>, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let alphabet = request.alphabet()?;
    log::debug!(
        "alphabet: {} chars from {} (exclude ambiguous: {})",
        alphabet.len(),
        request.classes,
        request.exclude_ambiguous
    );

    Ok(Batch {
        alphabet,
        length: request.length,
        remaining: count,
        rng,
    })
}

/// Draw `length` characters from a pre-built alphabet, preserving draw order.
pub fn from_alphabet<R>(alphabet: &Alphabet, length: usize, rng: &mut R) -> Password
where
    R: RngCore + CryptoRng + ?Sized,
{
    // Exact capacity so the buffer never reallocates and leaves copies behind.
    let mut buf = String::with_capacity(length);
    for _ in 0..length {
        buf.push(random_char(alphabet, rng));
    }
    Password(Zeroizing::new(buf))
}

#[inline]
fn random_char<R: RngCore + ?Sized>(alphabet: &Alphabet, rng: &mut R) -> char {
    alphabet.as_bytes()[uniform_index(rng, alphabet.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(7)
    }

    #[test]
    fn empty_classes_win_over_zero_length() {
        let request = GenerationRequest::new(0, ClassSet::empty(), false);
        assert_eq!(
            generate_with(&request, &mut rng()).unwrap_err(),
            GenerationError::NoClassSelected
        );
    }

    #[test]
    fn zero_length_with_classes_is_invalid() {
        let classes = ClassSet::empty().with(CharacterClass::Digit);
        assert_eq!(
            generate_with(&GenerationRequest::new(0, classes, false), &mut rng()).unwrap_err(),
            GenerationError::InvalidLength
        );
    }

    #[test]
    fn single_character_password() {
        let classes = ClassSet::empty().with(CharacterClass::Digit);
        let password = generate_with(&GenerationRequest::new(1, classes, false), &mut rng()).unwrap();
        assert_eq!(password.len(), 1);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn same_seed_same_password() {
        let request = GenerationRequest::new(24, ClassSet::all(), true);
        let a = generate_with(&request, &mut rng()).unwrap();
        let b = generate_with(&request, &mut rng()).unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn batch_produces_count_passwords() {
        let request = GenerationRequest::new(10, ClassSet::all(), false);
        let mut rng = rng();
        let batch = generate_batch(&request, 5, &mut rng).unwrap();
        assert_eq!(batch.len(), 5);
        let passwords: Vec<Password> = batch.collect();
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 10));
    }

    #[test]
    fn batch_is_lazy() {
        let request = GenerationRequest::new(10, ClassSet::all(), false);
        let mut rng = rng();
        let mut batch = generate_batch(&request, usize::MAX, &mut rng).unwrap();
        assert_eq!(batch.next().map(|p| p.len()), Some(10));
        assert_eq!(batch.len(), usize::MAX - 1);
    }

    #[test]
    fn batch_matches_single_generation() {
        let request = GenerationRequest::new(20, ClassSet::all(), true);
        let mut a = rng();
        let mut b = rng();
        let batched: Vec<Password> = generate_batch(&request, 3, &mut a).unwrap().collect();
        for password in batched {
            assert_eq!(password.as_str(), generate_with(&request, &mut b).unwrap().as_str());
        }
    }

    #[test]
    fn batch_validates_even_when_empty() {
        let request = GenerationRequest::new(10, ClassSet::empty(), false);
        let mut rng = rng();
        assert_eq!(
            generate_batch(&request, 0, &mut rng).err(),
            Some(GenerationError::NoClassSelected)
        );
    }

    #[test]
    fn debug_does_not_reveal_password() {
        let request = GenerationRequest::new(12, ClassSet::all(), false);
        let password = generate_with(&request, &mut rng()).unwrap();
        let shown = format!("{password:?}");
        assert_eq!(shown, "Password(<12 chars>)");
    }
}
