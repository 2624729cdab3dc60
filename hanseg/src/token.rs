//! Container of resultant tokens.
use std::ops::Range;

use crate::decoder::worker::Worker;

/// Origin of a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// A dictionary word chosen by the segmenter.
    Word,
    /// A single out-of-vocabulary character inside an ideograph run.
    Unknown,
    /// A run of ASCII letters, digits, `+`, `#` or newlines.
    Alnum,
    /// Any other character, or a whole run of them without alphanumerics.
    Symbol,
}

/// Per-token result stored by a [`Worker`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TokenNode {
    pub range_byte: Range<usize>,
    pub kind: TokenKind,
    pub word_cost: f64,
    pub total_cost: f64,
}

impl TokenNode {
    #[inline(always)]
    pub(crate) fn without_cost(range_byte: Range<usize>, kind: TokenKind) -> Self {
        Self {
            range_byte,
            kind,
            word_cost: 0.0,
            total_cost: 0.0,
        }
    }
}

/// Resultant token.
pub struct Token<'w> {
    worker: &'w Worker,
    index: usize,
}

impl<'w> Token<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker, index: usize) -> Self {
        Self { worker, index }
    }

    #[inline(always)]
    fn node(&self) -> &'w TokenNode {
        &self.worker.top_nodes[self.index]
    }

    /// Gets the position range of the token in characters.
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        let sent = &self.worker.sent;
        let range = &self.node().range_byte;
        sent.char_position(range.start)..sent.char_position(range.end)
    }

    /// Gets the position range of the token in bytes.
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        self.node().range_byte.clone()
    }

    /// Gets the surface string of the token.
    #[inline(always)]
    pub fn surface(&self) -> &'w str {
        &self.worker.sent.raw()[self.range_byte()]
    }

    /// Gets the origin of the token.
    #[inline(always)]
    pub fn kind(&self) -> TokenKind {
        self.node().kind
    }

    /// Gets the cost of the token itself, `-ln(frequency / total)` for words.
    ///
    /// It is zero for tokens that are not dictionary words.
    #[inline(always)]
    pub fn word_cost(&self) -> f64 {
        self.node().word_cost
    }

    /// Gets the cost from the beginning of the ideograph run to the end of the token.
    ///
    /// It is zero for tokens outside ideograph runs.
    #[inline(always)]
    pub fn total_cost(&self) -> f64 {
        self.node().total_cost
    }

    /// Copies the token into an owned [`TokenBuf`].
    pub fn to_buf(&self) -> TokenBuf {
        TokenBuf {
            surface: self.surface().to_string(),
            range_char: self.range_char(),
            range_byte: self.range_byte(),
            kind: self.kind(),
            word_cost: self.word_cost(),
            total_cost: self.total_cost(),
        }
    }
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("surface", &self.surface())
            .field("range_char", &self.range_char())
            .field("range_byte", &self.range_byte())
            .field("kind", &self.kind())
            .field("word_cost", &self.word_cost())
            .field("total_cost", &self.total_cost())
            .finish()
    }
}

/// Iterator of tokens.
pub struct TokenIter<'w> {
    worker: &'w Worker,
    i: usize,
}

impl<'w> TokenIter<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker) -> Self {
        Self { worker, i: 0 }
    }
}

impl<'w> Iterator for TokenIter<'w> {
    type Item = Token<'w>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.i < self.worker.num_tokens() {
            let t = self.worker.token(self.i);
            self.i += 1;
            Some(t)
        } else {
            None
        }
    }
}

/// An owned, self-contained token.
///
/// This struct is the owned counterpart to [`Token`].
/// It is useful for storing results or sending them across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBuf {
    /// Surface string.
    pub surface: String,
    /// Position range in characters.
    pub range_char: Range<usize>,
    /// Position range in bytes.
    pub range_byte: Range<usize>,
    /// Origin of the token.
    pub kind: TokenKind,
    /// Cost of the token itself.
    pub word_cost: f64,
    /// Cost from the beginning of the ideograph run.
    pub total_cost: f64,
}

impl<'w> From<Token<'w>> for TokenBuf {
    fn from(token: Token<'w>) -> Self {
        token.to_buf()
    }
}

#[cfg(test)]
mod tests {
    use crate::decoder::Decoder;
    use crate::dictionary::LexiconBuilder;

    use super::*;

    #[test]
    fn test_iter() {
        let lexicon =
            LexiconBuilder::from_entries([("自然", 5), ("语言", 4), ("处理", 3), ("自然语言", 2)])
                .unwrap();
        let decoder = Decoder::new(lexicon);
        let mut worker = decoder.new_worker();
        worker.reset_sentence("自然语言处理");
        worker.tokenize();
        assert_eq!(worker.num_tokens(), 2);

        let mut it = worker.token_iter();
        for i in 0..worker.num_tokens() {
            let lhs = worker.token(i);
            let rhs = it.next().unwrap();
            assert_eq!(lhs.surface(), rhs.surface());
        }
        assert!(it.next().is_none());
    }

    #[test]
    fn test_to_buf() {
        let lexicon = LexiconBuilder::from_entries([("你好", 1)]).unwrap();
        let decoder = Decoder::new(lexicon);
        let mut worker = decoder.new_worker();
        worker.reset_sentence("说你好!");
        worker.tokenize();
        let bufs: Vec<TokenBuf> = worker.token_iter().map(TokenBuf::from).collect();
        assert_eq!(bufs.len(), 3);
        assert_eq!(bufs[0].surface, "说");
        assert_eq!(bufs[0].kind, TokenKind::Unknown);
        assert_eq!(bufs[1].surface, "你好");
        assert_eq!(bufs[1].kind, TokenKind::Word);
        assert_eq!(bufs[1].range_char, 1..3);
        assert_eq!(bufs[1].range_byte, 3..9);
        assert_eq!(bufs[1].word_cost, 0.0);
        assert_eq!(bufs[2].surface, "!");
        assert_eq!(bufs[2].kind, TokenKind::Symbol);
        assert_eq!(bufs[2].range_char, 3..4);
    }
}
