//! Static lookup tables used to turn lyric text into tiles.
//!
//! Three disjoint tables are built lazily on first use and are read-only for
//! the lifetime of the process: chemical elements keyed by their standard
//! symbol, emoji keyed by whole lowercase words, and math/physics glyphs keyed
//! by single characters.

mod periodic;

use std::{collections::HashMap, fmt, sync::LazyLock};

use serde::{Deserialize, Serialize};

/// Family a tile belongs to. Chemical families come from the periodic table,
/// `Symbol` marks math/physics glyphs and `Unknown` marks unmatched characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    Symbol,
    Unknown,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "alkali-metal",
            Self::AlkalineEarthMetal => "alkaline-earth-metal",
            Self::TransitionMetal => "transition-metal",
            Self::PostTransitionMetal => "post-transition-metal",
            Self::Metalloid => "metalloid",
            Self::Nonmetal => "nonmetal",
            Self::Halogen => "halogen",
            Self::NobleGas => "noble-gas",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
            Self::Symbol => "symbol",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable row of a glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphEntry {
    pub key: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub atomic_number: Option<u8>,
    pub atomic_weight: Option<f64>,
}

static PERIODIC_TABLE: LazyLock<HashMap<&'static str, GlyphEntry>> = LazyLock::new(|| {
    periodic::ELEMENTS
        .iter()
        .map(|&(number, symbol, name, weight, category)| {
            let entry = GlyphEntry {
                key: symbol,
                symbol,
                name,
                category,
                atomic_number: Some(number),
                atomic_weight: Some(weight),
            };
            (symbol, entry)
        })
        .collect()
});

static EMOJI_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| periodic::WORD_EMOJI.iter().copied().collect());

static SYMBOL_TABLE: LazyLock<HashMap<&'static str, GlyphEntry>> = LazyLock::new(|| {
    periodic::MATH_SYMBOLS
        .iter()
        .map(|&(key, symbol, name)| {
            let entry = GlyphEntry {
                key,
                symbol,
                name,
                category: Category::Symbol,
                atomic_number: None,
                atomic_weight: None,
            };
            (key, entry)
        })
        .collect()
});

/// Looks up a chemical element by its exact, standard-cased symbol (`"Na"`).
pub fn element(symbol: &str) -> Option<&'static GlyphEntry> {
    PERIODIC_TABLE.get(symbol)
}

/// Looks up the emoji substitute for a whole word, ignoring case.
pub fn emoji_for_word(word: &str) -> Option<&'static str> {
    if let Some(emoji) = EMOJI_TABLE.get(word) {
        return Some(*emoji);
    }
    EMOJI_TABLE.get(word.to_lowercase().as_str()).copied()
}

/// Looks up a math/physics glyph for a single character. The exact key wins,
/// otherwise the uppercased character is tried.
pub fn symbol_for_char(ch: char) -> Option<&'static GlyphEntry> {
    let mut buf = [0u8; 4];
    if let Some(entry) = SYMBOL_TABLE.get(&*ch.encode_utf8(&mut buf)) {
        return Some(entry);
    }
    let upper: String = ch.to_uppercase().collect();
    SYMBOL_TABLE.get(upper.as_str())
}
