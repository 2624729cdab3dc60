//! Pre-pass splitting raw text into ideograph runs and other runs.
use std::ops::Range;
use std::str::CharIndices;
use std::sync::LazyLock;

use regex::{Matches, Regex};

use crate::common::{IDEOGRAPH_FIRST, IDEOGRAPH_LAST};
use crate::token::TokenKind;

static IDEOGRAPHS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{IDEOGRAPH_FIRST}-{IDEOGRAPH_LAST}]+")).unwrap()
});
static ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z0-9+#\n]+").unwrap());

/// Class of a [`Block`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BlockKind {
    /// A maximal run of ideographs, segmented with the dictionary.
    Ideograph,
    /// A maximal run of anything else.
    Other,
}

/// A maximal run of one [`BlockKind`] in the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block<'t> {
    kind: BlockKind,
    text: &'t str,
    start: usize,
}

impl<'t> Block<'t> {
    /// Gets the class of the block.
    #[inline(always)]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Gets the text of the block.
    #[inline(always)]
    pub const fn as_str(&self) -> &'t str {
        self.text
    }

    /// Gets the position range of the block in bytes.
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    /// Splits a non-ideograph block into alphanumeric runs and single symbols.
    ///
    /// Runs of `[A-Za-z0-9+#\n]` become one [`TokenKind::Alnum`] piece each and
    /// every other character becomes its own [`TokenKind::Symbol`] piece. A block
    /// without any alphanumeric run is returned whole as one symbol piece.
    /// Ranges are relative to the block.
    pub fn pieces(&self) -> Pieces<'t> {
        Pieces::new(self.text)
    }
}

/// Splits `text` into blocks, preserving order and dropping nothing.
///
/// # Examples
///
/// ```
/// use hanseg::blocker::{split_blocks, BlockKind};
///
/// let blocks: Vec<_> = split_blocks("你好, world!")
///     .map(|b| (b.kind(), b.as_str()))
///     .collect();
/// assert_eq!(
///     blocks,
///     [(BlockKind::Ideograph, "你好"), (BlockKind::Other, ", world!")],
/// );
/// ```
pub fn split_blocks(text: &str) -> Blocks<'_> {
    Blocks {
        splits: SplitMatches::new(&IDEOGRAPHS, text),
        text,
    }
}

/// Iterator of blocks, created by [`split_blocks`].
pub struct Blocks<'t> {
    splits: SplitMatches<'t>,
    text: &'t str,
}

impl<'t> Iterator for Blocks<'t> {
    type Item = Block<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, range) = match self.splits.next()? {
            Split::Matched(range) => (BlockKind::Ideograph, range),
            Split::Unmatched(range) => (BlockKind::Other, range),
        };
        Some(Block {
            kind,
            start: range.start,
            text: &self.text[range],
        })
    }
}

/// Iterator of pieces of a non-ideograph block, created by [`Block::pieces`].
pub struct Pieces<'t> {
    text: &'t str,
    verbatim: bool,
    splits: Option<SplitMatches<'t>>,
    // Characters of an unmatched gap still to be emitted one by one.
    gap: Option<(usize, CharIndices<'t>)>,
}

impl<'t> Pieces<'t> {
    fn new(text: &'t str) -> Self {
        let has_alnum = ALNUM.is_match(text);
        Self {
            text,
            verbatim: !has_alnum && !text.is_empty(),
            splits: has_alnum.then(|| SplitMatches::new(&ALNUM, text)),
            gap: None,
        }
    }
}

impl Iterator for Pieces<'_> {
    type Item = (Range<usize>, TokenKind);

    fn next(&mut self) -> Option<Self::Item> {
        if self.verbatim {
            self.verbatim = false;
            return Some((0..self.text.len(), TokenKind::Symbol));
        }
        loop {
            if let Some((base, chars)) = self.gap.as_mut() {
                if let Some((i, c)) = chars.next() {
                    let start = *base + i;
                    return Some((start..start + c.len_utf8(), TokenKind::Symbol));
                }
                self.gap = None;
            }
            match self.splits.as_mut()?.next()? {
                Split::Matched(range) => return Some((range, TokenKind::Alnum)),
                Split::Unmatched(range) => {
                    self.gap = Some((range.start, self.text[range].char_indices()));
                }
            }
        }
    }
}

enum Split {
    Matched(Range<usize>),
    Unmatched(Range<usize>),
}

/// Splits a text into non-empty matched and unmatched ranges of a pattern.
struct SplitMatches<'t> {
    finder: Matches<'static, 't>,
    text: &'t str,
    last: usize,
    pending: Option<Range<usize>>,
}

impl<'t> SplitMatches<'t> {
    fn new(re: &'static Regex, text: &'t str) -> Self {
        Self {
            finder: re.find_iter(text),
            text,
            last: 0,
            pending: None,
        }
    }
}

impl Iterator for SplitMatches<'_> {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        loop {
            if let Some(range) = self.pending.take() {
                return Some(Split::Matched(range));
            }
            match self.finder.next() {
                None => {
                    if self.last >= self.text.len() {
                        return None;
                    }
                    let range = self.last..self.text.len();
                    self.last = self.text.len();
                    return Some(Split::Unmatched(range));
                }
                Some(m) => {
                    let unmatched = self.last..m.start();
                    self.last = m.end();
                    self.pending = Some(m.range());
                    if !unmatched.is_empty() {
                        return Some(Split::Unmatched(unmatched));
                    }
                }
            }
        }
    }
}
