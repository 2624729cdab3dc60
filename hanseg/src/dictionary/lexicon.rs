use hashbrown::HashMap;

/// Lookup state of a string in a [`Lexicon`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Entry {
    /// Neither a word nor a prefix of any word.
    Unknown,
    /// A strict prefix of some word that is not a word by itself.
    PrefixOnly,
    /// A word with its (smoothed) frequency.
    Word(u64),
}

impl Entry {
    /// Checks if the entry can be extended into a word (or is one).
    #[inline(always)]
    pub const fn is_prefix(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Checks if the entry is a real word.
    #[inline(always)]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

/// Immutable dictionary of words with frequencies.
///
/// Every non-empty prefix of a stored word is also a key (as
/// [`Entry::PrefixOnly`] unless it is a word itself), so that the
/// "could this be extended into a word" check is a single hash lookup.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    pub(crate) entries: HashMap<String, Entry>,
    pub(crate) total: u64,
    pub(crate) num_words: usize,
}

impl Lexicon {
    /// Gets the lookup state of `word`.
    #[inline(always)]
    pub fn entry(&self, word: &str) -> Entry {
        self.entries.get(word).copied().unwrap_or(Entry::Unknown)
    }

    /// Returns the cost (negative natural log of the unigram probability) of `word`.
    ///
    /// Returns `Some(0.0)` for a string that is only a prefix of some word,
    /// and `None` for an unknown string.
    pub fn probability_cost(&self, word: &str) -> Option<f64> {
        match self.entry(word) {
            Entry::Unknown => None,
            Entry::PrefixOnly => Some(0.0),
            Entry::Word(freq) => Some(self.cost_of(freq)),
        }
    }

    /// Checks if `word` is a word or a prefix of some word.
    #[inline(always)]
    pub fn has_prefix(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Checks if `word` is a word.
    #[inline(always)]
    pub fn is_word(&self, word: &str) -> bool {
        self.entry(word).is_word()
    }

    /// Gets the frequency of `word`, or `None` if it is not a word.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        match self.entry(word) {
            Entry::Word(freq) => Some(freq),
            _ => None,
        }
    }

    /// Gets the sum of frequencies over all loaded entries.
    #[inline(always)]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Gets the number of distinct words.
    #[inline(always)]
    pub const fn num_words(&self) -> usize {
        self.num_words
    }

    /// Gets the number of keys, prefixes included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the lexicon has no keys.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Creates an iterator over words and their frequencies in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().filter_map(|(word, entry)| match entry {
            Entry::Word(freq) => Some((word.as_str(), *freq)),
            _ => None,
        })
    }

    #[inline(always)]
    pub(crate) fn cost_of(&self, freq: u64) -> f64 {
        -(freq as f64 / self.total as f64).ln()
    }
}
