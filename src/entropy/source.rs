use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Which secure generator backs a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    /// Operating system CSPRNG, queried on every draw.
    #[default]
    Os,
    /// ChaCha20 stream cipher seeded once from the OS.
    ChaCha,
}

impl Source {
    pub fn description(self) -> &'static str {
        match self {
            Source::Os => "OS CSPRNG (getrandom)",
            Source::ChaCha => "ChaCha20 seeded from the OS",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Os => f.write_str("os"),
            Source::ChaCha => f.write_str("chacha"),
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "os" | "urandom" | "getrandom" => Ok(Source::Os),
            "chacha" | "chacha20" => Ok(Source::ChaCha),
            other => Err(format!("unknown random source `{other}` (expected os or chacha)")),
        }
    }
}

/// Secure random generator selected at runtime.
pub enum Entropy {
    Os(OsRng),
    ChaCha(Box<ChaCha20Rng>),
}

impl Entropy {
    pub fn new(source: Source) -> Result<Self, rand::Error> {
        let rng = match source {
            Source::Os => Entropy::Os(OsRng),
            Source::ChaCha => Entropy::ChaCha(Box::new(ChaCha20Rng::from_rng(OsRng)?)),
        };
        log::debug!("random source: {}", source.description());
        Ok(rng)
    }

    pub fn source(&self) -> Source {
        match self {
            Entropy::Os(_) => Source::Os,
            Entropy::ChaCha(_) => Source::ChaCha,
        }
    }
}

impl RngCore for Entropy {
    fn next_u32(&mut self) -> u32 {
        match self {
            Entropy::Os(rng) => rng.next_u32(),
            Entropy::ChaCha(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Entropy::Os(rng) => rng.next_u64(),
            Entropy::ChaCha(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Entropy::Os(rng) => rng.fill_bytes(dest),
            Entropy::ChaCha(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Entropy::Os(rng) => rng.try_fill_bytes(dest),
            Entropy::ChaCha(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for Entropy {}
