//! Common settings in hanseg.

/// The first code point of the ideograph range handled by the segmenter.
pub const IDEOGRAPH_FIRST: char = '\u{4E00}';

/// The last code point of the ideograph range handled by the segmenter.
///
/// This follows the range used by jieba-style dictionaries; the few code
/// points above it in the CJK Unified Ideographs block are treated as
/// non-ideographs.
pub const IDEOGRAPH_LAST: char = '\u{9FD5}';

/// Checks if `c` belongs to the ideograph range.
#[inline(always)]
pub const fn is_ideograph(c: char) -> bool {
    IDEOGRAPH_FIRST <= c && c <= IDEOGRAPH_LAST
}

