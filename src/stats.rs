use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::transforms::{is_space, trim_space};

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Descriptive counts for a piece of text, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    /// Length in UTF-16 code units
    pub character_count: usize,
    pub word_count: usize,
    /// Segments between line breaks; never below 1
    pub line_count: usize,
    /// Size of the UTF-8 encoding
    pub byte_size: usize,
}

impl TextStats {
    /// Computes the stats of the given text. Never fails.
    ///
    /// # Examples
    /// ```
    /// use santext::stats::TextStats;
    ///
    /// let stats = TextStats::compute("");
    /// assert_eq!((stats.character_count, stats.word_count, stats.line_count, stats.byte_size), (0, 0, 1, 0));
    ///
    /// let stats = TextStats::compute("héllo wörld\nbye");
    /// assert_eq!(stats.character_count, 15);
    /// assert_eq!(stats.byte_size, 17);
    /// assert_eq!(stats.word_count, 3);
    /// assert_eq!(stats.line_count, 2);
    /// ```
    pub fn compute(text: &str) -> TextStats {
        TextStats {
            character_count: text.encode_utf16().count(),
            word_count: Self::count_words(text),
            line_count: LINE_BREAK.split(text).count(),
            byte_size: text.len(),
        }
    }

    fn count_words(text: &str) -> usize {
        if trim_space(text).is_empty() {
            0
        } else {
            text.split(is_space).filter(|word| !word.is_empty()).count()
        }
    }
}

/// Shorthand for [`TextStats::compute`]
pub fn compute(text: &str) -> TextStats {
    TextStats::compute(text)
}
