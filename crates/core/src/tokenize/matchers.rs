use std::borrow::Cow;

use crate::glyphs::{self, Category, GlyphEntry};

use super::ElementGlyph;

/// One strategy for classifying the characters at a position within a word.
///
/// A hit returns the glyph together with how many characters it consumed.
pub trait GlyphMatcher: Send + Sync {
    fn match_at(&self, word: &[char], pos: usize) -> Option<(ElementGlyph, usize)>;
}

/// Two-character window in standard chemical casing ("na" -> "Na").
#[derive(Debug, Default, Clone, Copy)]
pub struct ChemicalDigraphMatcher;

impl GlyphMatcher for ChemicalDigraphMatcher {
    fn match_at(&self, word: &[char], pos: usize) -> Option<(ElementGlyph, usize)> {
        let (first, second) = (word.get(pos)?, word.get(pos + 1)?);
        let key: String = first.to_uppercase().chain(second.to_lowercase()).collect();
        glyphs::element(&key).map(|entry| (ElementGlyph::from_entry(entry), 2))
    }
}

/// Single character, uppercased, against the periodic table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChemicalUnigraphMatcher;

impl GlyphMatcher for ChemicalUnigraphMatcher {
    fn match_at(&self, word: &[char], pos: usize) -> Option<(ElementGlyph, usize)> {
        let key: String = word.get(pos)?.to_uppercase().collect();
        glyphs::element(&key).map(|entry| (ElementGlyph::from_entry(entry), 1))
    }
}

/// Single character against the math/physics table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolMatcher;

impl GlyphMatcher for SymbolMatcher {
    fn match_at(&self, word: &[char], pos: usize) -> Option<(ElementGlyph, usize)> {
        glyphs::symbol_for_char(*word.get(pos)?).map(|entry| (ElementGlyph::from_entry(entry), 1))
    }
}

/// Total fallback: any character becomes an `unknown` tile of itself. Keeps
/// the scan terminating without gaps.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnknownFallbackMatcher;

impl GlyphMatcher for UnknownFallbackMatcher {
    fn match_at(&self, word: &[char], pos: usize) -> Option<(ElementGlyph, usize)> {
        word.get(pos).map(|&ch| (ElementGlyph::unknown(ch), 1))
    }
}

impl ElementGlyph {
    /// Tile for a character no table knows.
    pub(crate) fn unknown(ch: char) -> Self {
        Self {
            symbol: Cow::Owned(ch.to_string()),
            name: Cow::Borrowed("Unknown"),
            category: Category::Unknown,
            atomic_number: None,
            atomic_weight: None,
        }
    }

    pub(crate) fn from_entry(entry: &'static GlyphEntry) -> Self {
        Self {
            symbol: Cow::Borrowed(entry.symbol),
            name: Cow::Borrowed(entry.name),
            category: entry.category,
            atomic_number: entry.atomic_number,
            atomic_weight: entry.atomic_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn digraph_normalises_case() {
        let word = chars("nA");
        let (glyph, used) = ChemicalDigraphMatcher.match_at(&word, 0).unwrap();
        assert_eq!(glyph.symbol, "Na");
        assert_eq!(used, 2);
    }

    #[test]
    fn digraph_needs_two_characters() {
        let word = chars("n");
        assert!(ChemicalDigraphMatcher.match_at(&word, 0).is_none());
    }

    #[test]
    fn unigraph_uppercases() {
        let word = chars("o");
        let (glyph, used) = ChemicalUnigraphMatcher.match_at(&word, 0).unwrap();
        assert_eq!(glyph.symbol, "O");
        assert_eq!(glyph.atomic_number, Some(8));
        assert_eq!(used, 1);
    }

    #[test]
    fn symbol_matcher_has_no_atomic_number() {
        let word = chars("q");
        let (glyph, _) = SymbolMatcher.match_at(&word, 0).unwrap();
        assert_eq!(glyph.symbol, "ℚ");
        assert_eq!(glyph.category, Category::Symbol);
        assert_eq!(glyph.atomic_number, None);
    }

    #[test]
    fn fallback_always_matches_in_range() {
        let word = chars("!");
        let (glyph, used) = UnknownFallbackMatcher.match_at(&word, 0).unwrap();
        assert_eq!(glyph.symbol, "!");
        assert_eq!(glyph.category, Category::Unknown);
        assert_eq!(used, 1);
        assert!(UnknownFallbackMatcher.match_at(&word, 1).is_none());
    }
}
