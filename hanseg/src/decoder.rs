//! Unigram shortest-path decoder.
pub(crate) mod lattice;
pub mod worker;

use std::path::Path;
use std::sync::Arc;

use crate::blocker::{Block, BlockKind, Blocks, split_blocks};
use crate::decoder::lattice::Lattice;
use crate::decoder::worker::Worker;
use crate::dictionary::{Entry, Lexicon};
use crate::errors::Result;
use crate::token::TokenNode;

/// Decoder segmenting text with a [`Lexicon`].
///
/// The lexicon is shared read-only, so a decoder can be cloned cheaply and
/// used from several threads at once.
#[derive(Clone)]
pub struct Decoder {
    lexicon: Arc<Lexicon>,
}

impl Decoder {
    /// Creates a new decoder.
    ///
    /// The lexicon is moved into the decoder. If you need to share the lexicon
    /// among multiple decoders, use [`Decoder::from_shared_lexicon`].
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Creates a new decoder from a shared lexicon.
    pub fn from_shared_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Creates a new decoder by loading a text dictionary file.
    ///
    /// # Errors
    ///
    /// See [`Lexicon::load`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Lexicon::load(path)?))
    }

    /// Gets the reference to the lexicon.
    #[inline(always)]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Creates a new worker.
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }

    /// Segments `text` lazily, yielding tokens in their original order.
    ///
    /// The tokens concatenate back to `text`. Each call starts from scratch,
    /// and decoding never fails: characters missing from the lexicon come out
    /// as single-character tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use hanseg::{Decoder, LexiconBuilder};
    ///
    /// let lexicon = LexiconBuilder::from_entries([("你好", 3)])?;
    /// let decoder = Decoder::new(lexicon);
    ///
    /// let tokens: Vec<_> = decoder.decode("你好, world!").collect();
    /// assert_eq!(tokens, ["你好", ",", " ", "world", "!"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decode<'a>(&'a self, text: &'a str) -> Decode<'a> {
        Decode {
            decoder: self,
            text,
            blocks: split_blocks(text),
            lattice: Lattice::default(),
            path: vec![],
            pending: vec![],
            cursor: 0,
        }
    }

    /// Builds the segmentation graph of an ideograph run.
    pub(crate) fn build_lattice(&self, block: &str, lattice: &mut Lattice) {
        lattice.reset(block);
        let len_char = lattice.len_char();

        for start in 0..len_char {
            // One lookup answers both "is a prefix" and "is a word".
            // Prefix closure makes the early exit safe.
            for end in start + 1..=len_char {
                match self.lexicon.entry(lattice.substr(block, start, end)) {
                    Entry::Unknown => break,
                    Entry::PrefixOnly => {}
                    Entry::Word(freq) => {
                        lattice.insert_edge(start, end, self.lexicon.cost_of(freq));
                    }
                }
            }

            // No edge can end at start + 1 after this point.
            if !lattice.has_previous_edge(start + 1) {
                lattice.insert_fallback(start + 1);
            }
        }
    }

    /// Appends the tokens of `block` to `out` in order.
    pub(crate) fn push_block_tokens(
        &self,
        block: &Block,
        lattice: &mut Lattice,
        path: &mut Vec<usize>,
        out: &mut Vec<TokenNode>,
    ) {
        let offset = block.range_byte().start;
        match block.kind() {
            BlockKind::Ideograph => {
                self.build_lattice(block.as_str(), lattice);
                lattice.solve();

                path.clear();
                lattice.append_top_path(path);
                while let Some(end) = path.pop() {
                    let best = lattice.best_path(end);
                    let range_byte = offset + lattice.byte_position(best.start)
                        ..offset + lattice.byte_position(end);
                    out.push(TokenNode {
                        range_byte,
                        kind: best.kind,
                        word_cost: best.word_cost,
                        total_cost: best.total_cost,
                    });
                }
            }
            BlockKind::Other => {
                for (range, kind) in block.pieces() {
                    out.push(TokenNode::without_cost(
                        offset + range.start..offset + range.end,
                        kind,
                    ));
                }
            }
        }
    }
}

/// Lazy iterator of tokens, created by [`Decoder::decode`].
pub struct Decode<'a> {
    decoder: &'a Decoder,
    text: &'a str,
    blocks: Blocks<'a>,
    lattice: Lattice,
    path: Vec<usize>,
    // Tokens of the current block; `cursor` points at the next one to yield.
    pending: Vec<TokenNode>,
    cursor: usize,
}

impl<'a> Iterator for Decode<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor == self.pending.len() {
            let block = self.blocks.next()?;
            self.pending.clear();
            self.cursor = 0;
            self.decoder.push_block_tokens(
                &block,
                &mut self.lattice,
                &mut self.path,
                &mut self.pending,
            );
        }
        let range = self.pending[self.cursor].range_byte.clone();
        self.cursor += 1;
        Some(&self.text[range])
    }
}

impl std::iter::FusedIterator for Decode<'_> {}
