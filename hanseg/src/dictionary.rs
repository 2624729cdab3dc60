//! Dictionary for segmentation.
pub mod builder;
pub(crate) mod lexicon;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::{HansegError, Result};

pub use crate::dictionary::builder::{DictionaryEntry, LexiconBuilder, MIN_FREQUENCY};
pub use crate::dictionary::lexicon::{Entry, Lexicon};

impl Lexicon {
    /// Loads a lexicon from a text dictionary file.
    ///
    /// Each line is `<word>[ <frequency>][ <tag>]`. A missing or zero frequency
    /// is smoothed to [`MIN_FREQUENCY`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read, or if a line is
    /// malformed. Nothing is loaded in that case.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use hanseg::Lexicon;
    ///
    /// let lexicon = Lexicon::load("dict.txt")?;
    /// println!("{} words", lexicon.num_words());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = Self::open(path)?;
        let lexicon = Self::from_reader(file)?;
        lexicon.log_loaded(path);
        Ok(lexicon)
    }

    /// Loads a lexicon from a zstd-compressed text dictionary file.
    ///
    /// # Errors
    ///
    /// Same as [`Lexicon::load`], plus decompression failures.
    pub fn from_zstd<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = Self::open(path)?;
        let lexicon = Self::from_reader(zstd::Decoder::new(file)?)?;
        lexicon.log_loaded(path);
        Ok(lexicon)
    }

    /// Creates a lexicon from a reader of a text dictionary.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or if a line is malformed.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut builder = LexiconBuilder::new();
        builder.read_lines(BufReader::new(rdr))?;
        Ok(builder.build())
    }

    fn open(path: &Path) -> Result<File> {
        File::open(path).map_err(|e| {
            log::error!("[hanseg] Failed to open dictionary file {}: {}", path.display(), e);
            HansegError::StdIo(e)
        })
    }

    fn log_loaded(&self, path: &Path) {
        log::info!(
            "[hanseg] Loaded {} words ({} keys, total frequency {}) from {}",
            self.num_words(),
            self.len(),
            self.total(),
            path.display(),
        );
    }
}
