//! Seeds for deterministic board generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// Errors that can occur when parsing a seed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("expected 64 hex characters, found {len}")]
    WrongLength {
        /// The number of characters found.
        len: usize,
    },
    /// The string contains a non-hexadecimal character.
    #[display("invalid hex character {character:?}")]
    InvalidHexCharacter {
        /// The offending character.
        character: char,
    },
}

/// A 256-bit seed identifying one generated board.
///
/// The same seed always reproduces the same board for a given clue target,
/// so a seed's hex form is a compact way to share, replay, or benchmark a
/// generated puzzle.
///
/// # Examples
///
/// ```
/// use sudoscope_generator::GeneratorSeed;
///
/// let seed: GeneratorSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
/// # Ok::<(), sudoscope_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorSeed([u8; 32]);

impl GeneratorSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// Handy for memorable, reproducible boards: the same phrase always
    /// yields the same seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoscope_generator::GeneratorSeed;
    ///
    /// let a = GeneratorSeed::from_phrase("daily board 2024-06-01");
    /// let b = GeneratorSeed::from_phrase("daily board 2024-06-01");
    /// assert_eq!(a, b);
    /// assert_ne!(a, GeneratorSeed::from_phrase("daily board 2024-06-02"));
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }
}

impl FromStr for GeneratorSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::WrongLength { len });
        }
        let mut bytes = [0u8; 32];
        for (i, character) in s.chars().enumerate() {
            let Some(nibble) = character.to_digit(16) else {
                return Err(ParseSeedError::InvalidHexCharacter { character });
            };
            #[expect(clippy::cast_possible_truncation)]
            let nibble = nibble as u8;
            bytes[i / 2] = bytes[i / 2] << 4 | nibble;
        }
        Ok(Self(bytes))
    }
}

impl Display for GeneratorSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
