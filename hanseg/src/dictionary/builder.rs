//! Builder of [`Lexicon`] from dictionary entries.
use std::io::BufRead;
use std::sync::LazyLock;

use hashbrown::HashMap;
use regex::Regex;

use crate::dictionary::lexicon::{Entry, Lexicon};
use crate::errors::{HansegError, Result};

/// Frequency given to words whose frequency is missing, unparsable or zero.
pub const MIN_FREQUENCY: u64 = 1;

static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)(?: ([0-9]+))?(?: ([a-z]+))?$").unwrap());

/// A parsed line of a dictionary file, `<word>[ <frequency>][ <tag>]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DictionaryEntry {
    /// Surface of the word.
    pub word: String,
    /// Smoothed frequency, at least [`MIN_FREQUENCY`].
    pub frequency: u64,
    /// Part-of-speech tag. Parsed but not used for segmentation.
    pub tag: Option<String>,
}

impl DictionaryEntry {
    /// Parses a single dictionary line.
    ///
    /// `line_no` is the 1-based line number reported on failure.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let caps = LINE_PATTERN.captures(line).ok_or_else(|| {
            HansegError::invalid_format(
                "dict",
                line_no,
                format!("A line must be `<word>[ <frequency>][ <tag>]`, {line:?}"),
            )
        })?;
        let frequency = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(MIN_FREQUENCY)
            .max(MIN_FREQUENCY);
        Ok(Self {
            word: caps[1].to_string(),
            frequency,
            tag: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }
}

/// Builder of [`Lexicon`].
#[derive(Default)]
pub struct LexiconBuilder {
    entries: HashMap<String, Entry>,
    total: u64,
}

impl LexiconBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lexicon from an iterator of words and frequencies.
    ///
    /// # Errors
    ///
    /// [`HansegError`] is returned when a word is empty.
    pub fn from_entries<I, S>(entries: I) -> Result<Lexicon>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut builder = Self::new();
        for (word, freq) in entries {
            builder.insert(word, freq)?;
        }
        Ok(builder.build())
    }

    /// Reads entries line by line from a text dictionary.
    ///
    /// A trailing `\r` is ignored. Blank lines are malformed.
    ///
    /// # Errors
    ///
    /// [`HansegError`] is returned when reading fails or when a line is malformed.
    pub fn read_lines<R>(&mut self, rdr: R) -> Result<&mut Self>
    where
        R: BufRead,
    {
        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            let entry = DictionaryEntry::parse(line, i + 1)?;
            log::trace!("[hanseg] line {}: {:?}", i + 1, entry);
            self.push(entry)?;
        }
        Ok(self)
    }

    /// Adds a parsed entry.
    ///
    /// # Errors
    ///
    /// [`HansegError`] is returned when the word is empty.
    pub fn push(&mut self, entry: DictionaryEntry) -> Result<&mut Self> {
        self.insert(entry.word, entry.frequency)
    }

    /// Adds a word with its frequency.
    ///
    /// The frequency is raised to [`MIN_FREQUENCY`] and added to the total even
    /// when the word was already inserted, in which case its frequency is
    /// overwritten. Missing prefixes of the word are registered as
    /// [`Entry::PrefixOnly`].
    ///
    /// # Errors
    ///
    /// [`HansegError`] is returned when the word is empty.
    pub fn insert<S>(&mut self, word: S, freq: u64) -> Result<&mut Self>
    where
        S: Into<String>,
    {
        let word = word.into();
        if word.is_empty() {
            return Err(HansegError::invalid_argument("word", "A word must not be empty."));
        }
        let freq = freq.max(MIN_FREQUENCY);
        self.total = self.total.saturating_add(freq);
        for (end, _) in word.char_indices().skip(1) {
            self.entries
                .entry_ref(&word[..end])
                .or_insert(Entry::PrefixOnly);
        }
        self.entries.insert(word, Entry::Word(freq));
        Ok(self)
    }

    /// Finalizes the lexicon.
    pub fn build(self) -> Lexicon {
        let num_words = self.entries.values().filter(|e| e.is_word()).count();
        Lexicon {
            entries: self.entries,
            total: self.total,
            num_words,
        }
    }
}
