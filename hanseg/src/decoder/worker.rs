//! Provider of a routine for segmentation.
use crate::blocker::split_blocks;
use crate::decoder::Decoder;
use crate::decoder::lattice::Lattice;
use crate::sentence::Sentence;
use crate::token::{Token, TokenIter, TokenNode};

/// Provider of a routine for segmentation.
///
/// It holds the internal data structures used in segmentation,
/// which can be reused to avoid unnecessary memory reallocation.
pub struct Worker {
    pub(crate) decoder: Decoder,
    pub(crate) sent: Sentence,
    pub(crate) lattice: Lattice,
    pub(crate) path: Vec<usize>,
    pub(crate) top_nodes: Vec<TokenNode>,
}

impl Worker {
    /// Creates a new instance.
    pub(crate) fn new(decoder: Decoder) -> Self {
        Self {
            decoder,
            sent: Sentence::new(),
            lattice: Lattice::default(),
            path: vec![],
            top_nodes: vec![],
        }
    }

    /// Resets the input sentence to be segmented.
    pub fn reset_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.sent.clear();
        self.top_nodes.clear();
        let input = input.as_ref();
        if !input.is_empty() {
            self.sent.set_sentence(input);
        }
    }

    /// Segments the input sentence set by [`Self::reset_sentence()`],
    /// storing the resultant tokens in the worker.
    pub fn tokenize(&mut self) {
        self.top_nodes.clear();
        for block in split_blocks(self.sent.raw()) {
            self.decoder.push_block_tokens(
                &block,
                &mut self.lattice,
                &mut self.path,
                &mut self.top_nodes,
            );
        }
    }

    /// Gets the number of resultant tokens.
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.top_nodes.len()
    }

    /// Gets the `i`-th resultant token.
    ///
    /// # Panics
    ///
    /// It will panic when `i` is out of range.
    #[inline(always)]
    pub fn token<'w>(&'w self, i: usize) -> Token<'w> {
        assert!(i < self.num_tokens());
        Token::new(self, i)
    }

    /// Creates an iterator of resultant tokens.
    #[inline(always)]
    pub fn token_iter<'w>(&'w self) -> TokenIter<'w> {
        TokenIter::new(self)
    }
}
