//! Finger-key alphabet, chords, and chord-space enumeration.

use crate::constants::{CHORD_LENGTH, DEFAULT_ALPHABET};
use crate::error::{ChartError, Result};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One physical finger-key symbol (e.g. `O`, `L`, `M`, `R`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct KeyId(char);

impl KeyId {
    /// Creates a key identifier from its symbol.
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chord: one key identifier per finger row.
///
/// Slot position is significant, `LOOO` and `OOOL` are different chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chord([KeyId; CHORD_LENGTH]);

impl Chord {
    /// Creates a chord from its keys in slot order.
    #[must_use]
    pub const fn new(keys: [KeyId; CHORD_LENGTH]) -> Self {
        Self(keys)
    }

    /// Keys in slot order.
    #[must_use]
    pub const fn keys(&self) -> &[KeyId; CHORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.0 {
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl Serialize for Chord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reasons a chord notation string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordParseError {
    /// Notation does not contain exactly one symbol per slot
    WrongLength {
        /// Number of symbols found
        found: usize,
    },
    /// Symbol is not part of the alphabet
    UnknownSymbol(char),
}

impl fmt::Display for ChordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { found } => {
                write!(f, "chord needs {CHORD_LENGTH} keys, found {found}")
            }
            Self::UnknownSymbol(symbol) => write!(f, "unknown finger key {symbol:?}"),
        }
    }
}

impl std::error::Error for ChordParseError {}

/// Ordered set of finger-key identifiers a chord is built from.
///
/// # Validation
///
/// - At least one symbol
/// - No duplicate symbols
/// - The chord space (`len^4`) fits in a `usize`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAlphabet {
    symbols: Vec<KeyId>,
    chord_count: usize,
}

impl KeyAlphabet {
    /// Creates an alphabet from symbols in index order.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self> {
        let symbols: Vec<KeyId> = symbols.into_iter().map(KeyId::new).collect();

        if symbols.is_empty() {
            return Err(ChartError::invalid_alphabet("alphabet is empty"));
        }

        let mut seen = HashSet::new();
        for key in &symbols {
            if !seen.insert(*key) {
                return Err(ChartError::invalid_alphabet(format!(
                    "duplicate finger key {:?}",
                    key.symbol()
                )));
            }
        }

        let chord_count = symbols
            .len()
            .checked_pow(CHORD_LENGTH as u32)
            .ok_or_else(|| ChartError::invalid_alphabet("chord space is too large"))?;

        Ok(Self {
            symbols,
            chord_count,
        })
    }

    /// Symbols in index order.
    #[must_use]
    pub fn symbols(&self) -> &[KeyId] {
        &self.symbols
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet has at least one symbol.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Size of the chord space, `len^4`.
    #[must_use]
    pub const fn chord_count(&self) -> usize {
        self.chord_count
    }

    /// Returns true if the symbol belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&KeyId::new(symbol))
    }

    /// Enumerates every chord, starting from the beginning on each call.
    ///
    /// Slot 0 varies fastest and slot 3 slowest.
    ///
    /// # Examples
    ///
    /// ```
    /// use twiddler_chart::models::KeyAlphabet;
    ///
    /// let alphabet = KeyAlphabet::default();
    /// let chords: Vec<String> = alphabet.chords().map(|c| c.to_string()).collect();
    /// assert_eq!(chords.len(), 256);
    /// assert_eq!(chords[0], "OOOO");
    /// assert_eq!(chords[1], "LOOO");
    /// assert_eq!(chords[255], "RRRR");
    /// ```
    #[must_use]
    pub fn chords(&self) -> ChordIter<'_> {
        ChordIter {
            alphabet: self,
            next: 0,
            end: self.chord_count,
        }
    }

    /// Builds the chord at a position of the enumeration order.
    fn chord_at(&self, index: usize) -> Chord {
        let base = self.symbols.len();
        let mut rest = index;
        let mut keys = [self.symbols[0]; CHORD_LENGTH];
        for key in &mut keys {
            *key = self.symbols[rest % base];
            rest /= base;
        }
        Chord(keys)
    }

    /// Parses finger-chord notation such as `LMRO` or `L M R O`.
    ///
    /// Whitespace is ignored; every other character must be a symbol of
    /// this alphabet.
    pub fn parse_chord(&self, text: &str) -> std::result::Result<Chord, ChordParseError> {
        let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CHORD_LENGTH {
            return Err(ChordParseError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut keys = [self.symbols[0]; CHORD_LENGTH];
        for (key, symbol) in keys.iter_mut().zip(symbols) {
            if !self.contains(symbol) {
                return Err(ChordParseError::UnknownSymbol(symbol));
            }
            *key = KeyId::new(symbol);
        }
        Ok(Chord(keys))
    }
}

impl Default for KeyAlphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().map(KeyId::new).collect(),
            chord_count: DEFAULT_ALPHABET.chars().count().pow(CHORD_LENGTH as u32),
        }
    }
}

impl FromStr for KeyAlphabet {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars().filter(|c| !c.is_whitespace()))
    }
}

impl fmt::Display for KeyAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.symbols {
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

/// Lazy enumeration of a chord space. Created by [`KeyAlphabet::chords`].
#[derive(Debug, Clone)]
pub struct ChordIter<'a> {
    alphabet: &'a KeyAlphabet,
    next: usize,
    end: usize,
}

impl Iterator for ChordIter<'_> {
    type Item = Chord;

    fn next(&mut self) -> Option<Chord> {
        if self.next >= self.end {
            return None;
        }
        let chord = self.alphabet.chord_at(self.next);
        self.next += 1;
        Some(chord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Chord> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl ExactSizeIterator for ChordIter<'_> {}

impl std::iter::FusedIterator for ChordIter<'_> {}
