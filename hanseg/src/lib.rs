//! # hanseg
//!
//! hanseg is a dictionary-driven Chinese word segmenter. Runs of ideographs are
//! split along the path of highest unigram probability through a lexicon of
//! word frequencies, and everything else is split into alphanumeric runs and
//! single symbols.
//!
//! ## Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use hanseg::{Decoder, LexiconBuilder};
//!
//! let mut builder = LexiconBuilder::new();
//! builder.read_lines("北京 10\n大学 10\n北京大学 100 nt\n".as_bytes())?;
//! let decoder = Decoder::new(builder.build());
//!
//! let tokens: Vec<_> = decoder.decode("我在北京大学读书").collect();
//! assert_eq!(tokens, ["我", "在", "北京大学", "读", "书"]);
//!
//! let mut worker = decoder.new_worker();
//! worker.reset_sentence("北京大学, 2024");
//! worker.tokenize();
//! assert_eq!(worker.num_tokens(), 4);
//!
//! let t0 = worker.token(0);
//! assert_eq!(t0.surface(), "北京大学");
//! assert_eq!(t0.range_char(), 0..4);
//! assert_eq!(t0.range_byte(), 0..12);
//!
//! let t3 = worker.token(3);
//! assert_eq!(t3.surface(), "2024");
//! assert_eq!(t3.range_char(), 6..10);
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs)]

pub mod blocker;
pub mod common;
pub mod decoder;
pub mod dictionary;
pub mod errors;
mod sentence;
pub mod token;

pub use decoder::Decoder;
pub use dictionary::{Lexicon, LexiconBuilder};

/// Version number of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
