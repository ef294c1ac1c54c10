//! Lyric-to-tile tokenizer.
//!
//! A line is normalised (hyphens and parenthetical asides become spaces), split
//! on single spaces and each word is classified. Whole words may map to an
//! emoji; everything else is scanned left to right through an ordered chain of
//! [`GlyphMatcher`]s where the first hit wins and consumes its characters.

mod matchers;

use std::{borrow::Cow, fmt, sync::LazyLock};

use serde::Serialize;

use crate::glyphs::{self, Category};

pub use matchers::{
    ChemicalDigraphMatcher, ChemicalUnigraphMatcher, GlyphMatcher, SymbolMatcher,
    UnknownFallbackMatcher,
};

/// Tile content for an element-styled token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementGlyph {
    pub symbol: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub category: Category,
    pub atomic_number: Option<u8>,
    pub atomic_weight: Option<f64>,
}

/// One classified unit of a tokenized lyric line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DisplayToken {
    /// `text` is the slice of the input word the glyph consumed.
    Element { text: String, glyph: ElementGlyph },
    Emoji { word: String, emoji: &'static str },
    Space,
}

impl DisplayToken {
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Element { glyph, .. } => Some(glyph.category),
            Self::Emoji { .. } | Self::Space => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.category() == Some(Category::Unknown)
    }

    /// Text shown on the tile face.
    pub fn display_symbol(&self) -> &str {
        match self {
            Self::Element { glyph, .. } => glyph.symbol.as_ref(),
            Self::Emoji { emoji, .. } => *emoji,
            Self::Space => " ",
        }
    }
}

/// Replaces hyphens with spaces and blanks out every `(...)` run with spaces
/// of the same length. A `(` without a closing `)` is left untouched.
pub fn normalize_line(line: &str) -> String {
    let mut chars: Vec<char> = line
        .chars()
        .map(|ch| if ch == '-' { ' ' } else { ch })
        .collect();

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '(' {
            match chars[i + 1..].iter().position(|&ch| ch == ')') {
                Some(offset) => {
                    let end = i + 1 + offset;
                    chars[i..=end].fill(' ');
                    i = end + 1;
                }
                None => break,
            }
        } else {
            i += 1;
        }
    }

    chars.into_iter().collect()
}

/// Ordered matcher chain applied per character position.
pub struct Tokenizer {
    matchers: Vec<Box<dyn GlyphMatcher>>,
}

impl Tokenizer {
    /// Chemical digraph, chemical unigraph, symbol, unknown fallback.
    pub fn new() -> Self {
        Self::with_matchers(vec![
            Box::new(ChemicalDigraphMatcher),
            Box::new(ChemicalUnigraphMatcher),
            Box::new(SymbolMatcher),
        ])
    }

    /// Builds a tokenizer from a custom chain. [`UnknownFallbackMatcher`] is
    /// always appended, so every character ends up in some tile.
    pub fn with_matchers(mut matchers: Vec<Box<dyn GlyphMatcher>>) -> Self {
        matchers.push(Box::new(UnknownFallbackMatcher));
        Self { matchers }
    }

    pub fn tokenize(&self, line: &str) -> Vec<DisplayToken> {
        if line.is_empty() {
            return Vec::new();
        }

        let normalized = normalize_line(line);
        self.scan_words(&normalized)
            .flat_map(|word| word.unwrap_or_else(|| vec![DisplayToken::Space]))
            .collect()
    }

    /// Per-word tile groups for layout. Unknown tiles are dropped and words
    /// with nothing left to show are skipped.
    ///
    /// Takes the line rather than a token stream because single spaces leave
    /// no `Space` token behind.
    pub fn group_words(&self, line: &str) -> Vec<Vec<DisplayToken>> {
        let normalized = normalize_line(line);
        self.scan_words(&normalized)
            .flatten()
            .filter_map(|mut tokens| {
                tokens.retain(|token| !token.is_unknown());
                (!tokens.is_empty()).then_some(tokens)
            })
            .collect()
    }

    /// Splits a normalised line on single spaces. Blank fields yield `None`.
    fn scan_words<'a>(
        &'a self,
        normalized: &'a str,
    ) -> impl Iterator<Item = Option<Vec<DisplayToken>>> + 'a {
        normalized
            .split(' ')
            .map(move |word| (!word.trim().is_empty()).then(|| self.tokenize_word(word)))
    }

    fn tokenize_word(&self, word: &str) -> Vec<DisplayToken> {
        if let Some(emoji) = glyphs::emoji_for_word(word) {
            return vec![DisplayToken::Emoji {
                word: word.to_string(),
                emoji,
            }];
        }

        let chars: Vec<char> = word.chars().collect();
        let mut out = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            // Zero-width hits would stall the scan, so they count as misses.
            let (glyph, used) = self
                .matchers
                .iter()
                .find_map(|matcher| matcher.match_at(&chars, pos).filter(|(_, used)| *used > 0))
                .unwrap_or_else(|| (ElementGlyph::unknown(chars[pos]), 1));

            let end = (pos + used).min(chars.len());
            out.push(DisplayToken::Element {
                text: chars[pos..end].iter().collect(),
                glyph,
            });
            pos = end;
        }
        out
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

static DEFAULT_TOKENIZER: LazyLock<Tokenizer> = LazyLock::new(Tokenizer::new);

/// Tokenizes a line with the default matcher chain.
pub fn tokenize(line: &str) -> Vec<DisplayToken> {
    DEFAULT_TOKENIZER.tokenize(line)
}

/// Tokens that should be drawn; unknown characters are counted during
/// tokenization but never rendered.
pub fn renderable(tokens: &[DisplayToken]) -> impl Iterator<Item = &DisplayToken> {
    tokens.iter().filter(|token| !token.is_unknown())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(tokens: &[DisplayToken]) -> Vec<&str> {
        tokens.iter().map(DisplayToken::display_symbol).collect()
    }

    #[test]
    fn empty_line_yields_nothing() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn digraph_beats_two_unigraphs() {
        let tokens = tokenize("Na");
        assert_eq!(tokens.len(), 1);
        match &tokens[0] {
            DisplayToken::Element { text, glyph } => {
                assert_eq!(text, "Na");
                assert_eq!(glyph.name, "Sodium");
            }
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn emoji_word_skips_character_scan() {
        let tokens = tokenize("love");
        assert_eq!(
            tokens,
            vec![DisplayToken::Emoji {
                word: "love".to_string(),
                emoji: "❤️"
            }]
        );
        assert!(matches!(&tokenize("LOVE")[0], DisplayToken::Emoji { word, .. } if word == "LOVE"));
    }

    #[test]
    fn unknown_characters_are_kept_then_filtered() {
        let tokens = tokenize("!!");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(DisplayToken::is_unknown));
        assert_eq!(renderable(&tokens).count(), 0);
    }

    #[test]
    fn greedy_scan_without_backtracking() {
        // "ho": Ho (holmium) wins over H + O.
        assert_eq!(symbols(&tokenize("ho")), vec!["Ho"]);
        // "bag": Ba + G, and G falls back to the symbol table.
        assert_eq!(symbols(&tokenize("bag")), vec!["Ba", "𝒢"]);
        // "jam": no J element, J symbol, then Am.
        assert_eq!(symbols(&tokenize("jam")), vec!["𝒥", "Am"]);
    }

    #[test]
    fn single_spaces_separate_words_without_space_tokens() {
        let tokens = tokenize("no way");
        assert!(!tokens.contains(&DisplayToken::Space));
        assert_eq!(symbols(&tokens), vec!["No", "W", "∀", "Y"]);
    }

    #[test]
    fn repeated_spaces_become_space_tokens() {
        let tokens = tokenize("hi  yo");
        assert_eq!(
            tokens.iter().filter(|t| **t == DisplayToken::Space).count(),
            1
        );
        assert_eq!(tokenize("   "), vec![DisplayToken::Space; 4]);
    }

    #[test]
    fn hyphens_and_parentheticals_become_spaces() {
        assert_eq!(normalize_line("well-known"), "well known");
        assert_eq!(
            normalize_line("go (oh yeah) now"),
            format!("go {} now", " ".repeat(9))
        );
        assert_eq!(normalize_line("(a)(b)"), "      ");
        assert_eq!(normalize_line("open ( only"), "open ( only");
        let tokens = tokenize("(ooh) - (aah)");
        assert!(tokens.iter().all(|t| *t == DisplayToken::Space));
    }

    #[test]
    fn normalization_is_idempotent() {
        for line in [
            "one-two (three) four",
            "((nested) tail)",
            "unterminated ( paren",
            "",
            "plain",
        ] {
            let once = normalize_line(line);
            assert_eq!(normalize_line(&once), once, "line {line:?}");
        }
    }

    #[test]
    fn every_character_is_consumed_exactly_once() {
        let line = "Shine bright like a diamond! (yeah) we're 100 percent-fire";
        let normalized = normalize_line(line);
        let expected: usize = normalized
            .split(' ')
            .filter(|w| !w.trim().is_empty())
            .map(|w| w.chars().count())
            .sum();

        let consumed: usize = tokenize(line)
            .iter()
            .map(|token| match token {
                DisplayToken::Element { text, .. } => text.chars().count(),
                DisplayToken::Emoji { word, .. } => word.chars().count(),
                DisplayToken::Space => 0,
            })
            .sum();

        assert_eq!(consumed, expected);
    }

    #[test]
    fn tokens_preserve_input_order() {
        let line = "carbon sun";
        let text: String = tokenize(line)
            .iter()
            .filter_map(|token| match token {
                DisplayToken::Element { text, .. } => Some(text.clone()),
                DisplayToken::Emoji { word, .. } => Some(word.clone()),
                DisplayToken::Space => None,
            })
            .collect();
        assert_eq!(text, "carbonsun");
    }

    #[test]
    fn word_groups_drop_empty_words() {
        let groups = Tokenizer::new().group_words("hi !! love");
        assert_eq!(groups.len(), 2);
        assert!(matches!(groups[1][0], DisplayToken::Emoji { .. }));
    }

    #[test]
    fn word_groups_follow_the_token_stream() {
        let line = "carbon-dating (ooh) love  !!";
        let grouped: Vec<DisplayToken> = Tokenizer::new()
            .group_words(line)
            .into_iter()
            .flatten()
            .collect();
        let expected: Vec<DisplayToken> = renderable(&tokenize(line))
            .filter(|token| **token != DisplayToken::Space)
            .cloned()
            .collect();
        assert_eq!(grouped, expected);
    }

    #[test]
    fn scan_steps_by_character_not_byte() {
        let tokens = tokenize("ßa 🔥o");
        assert_eq!(symbols(&tokens), vec!["ß", "∀", "🔥", "O"]);
        assert!(tokens[0].is_unknown());
        assert!(tokens[2].is_unknown());
        let shown: Vec<&str> = renderable(&tokens).map(DisplayToken::display_symbol).collect();
        assert_eq!(shown, vec!["∀", "O"]);
    }

    struct ZeroWidth;

    impl GlyphMatcher for ZeroWidth {
        fn match_at(&self, word: &[char], pos: usize) -> Option<(ElementGlyph, usize)> {
            word.get(pos).map(|&ch| (ElementGlyph::unknown(ch), 0))
        }
    }

    #[test]
    fn zero_width_hits_fall_through_to_the_next_matcher() {
        let tokenizer =
            Tokenizer::with_matchers(vec![Box::new(ZeroWidth), Box::new(ChemicalUnigraphMatcher)]);
        assert_eq!(symbols(&tokenizer.tokenize("ho")), vec!["H", "O"]);
    }

    struct NothingMatches;

    impl GlyphMatcher for NothingMatches {
        fn match_at(&self, _word: &[char], _pos: usize) -> Option<(ElementGlyph, usize)> {
            None
        }
    }

    #[test]
    fn custom_chains_gain_a_fallback() {
        let tokenizer = Tokenizer::with_matchers(vec![Box::new(NothingMatches)]);
        let tokens = tokenizer.tokenize("ab");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(DisplayToken::is_unknown));
    }
}
