//! Splitting text into comparison units
//!
//! A tokenizer turns a text into a sequence of units plus, for every unit,
//! the character range it came from. Offsets are always recorded against
//! the text as given; case folding only changes the units themselves, so
//! results can be mapped back onto the original text.

use crate::types::OffsetSpan;
use core::hash::Hash;

/// Units of a text together with their source ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<U> {
    /// Comparison units in text order
    pub units: Vec<U>,
    /// Character range of each unit in the original text
    pub offsets: Vec<OffsetSpan>,
}

impl<U> TokenStream<U> {
    /// Create an empty stream
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            offsets: Vec::new(),
        }
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the stream has no units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn push(&mut self, unit: U, span: OffsetSpan) {
        self.units.push(unit);
        self.offsets.push(span);
    }
}

impl<U> Default for TokenStream<U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluggable tokenization strategy
pub trait Tokenizer {
    /// Comparison unit produced by this tokenizer
    type Unit: Eq + Hash;

    /// Split `text` into units and their character offsets
    fn tokenize(&self, text: &str) -> TokenStream<Self::Unit>;
}

/// One unit per character
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTokenizer {
    normalize_case: bool,
}

impl CharTokenizer {
    /// Create a character tokenizer
    pub fn new(normalize_case: bool) -> Self {
        Self { normalize_case }
    }
}

impl Tokenizer for CharTokenizer {
    type Unit = char;

    fn tokenize(&self, text: &str) -> TokenStream<char> {
        let mut stream = TokenStream::new();
        for (i, ch) in text.chars().enumerate() {
            let unit = if self.normalize_case { fold_char(ch) } else { ch };
            stream.push(unit, OffsetSpan::new(i, i + 1));
        }
        stream
    }
}

/// Lowercase a single character without changing the unit count
///
/// Characters whose lowercase form expands to several characters keep the
/// first one.
fn fold_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// One unit per maximal run of non-whitespace characters
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer {
    normalize_case: bool,
}

impl WordTokenizer {
    /// Create a word tokenizer
    pub fn new(normalize_case: bool) -> Self {
        Self { normalize_case }
    }

    fn unit(&self, word: &str) -> String {
        if self.normalize_case {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

impl Tokenizer for WordTokenizer {
    type Unit = String;

    fn tokenize(&self, text: &str) -> TokenStream<String> {
        let mut stream = TokenStream::new();
        // (char offset, byte offset) of the word being scanned
        let mut current: Option<(usize, usize)> = None;

        for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
            match (ch.is_whitespace(), current) {
                (false, None) => current = Some((char_idx, byte_idx)),
                (true, Some((start_char, start_byte))) => {
                    stream.push(
                        self.unit(&text[start_byte..byte_idx]),
                        OffsetSpan::new(start_char, char_idx),
                    );
                    current = None;
                }
                _ => {}
            }
        }

        if let Some((start_char, start_byte)) = current {
            let end_char = start_char + text[start_byte..].chars().count();
            stream.push(
                self.unit(&text[start_byte..]),
                OffsetSpan::new(start_char, end_char),
            );
        }

        stream
    }
}
