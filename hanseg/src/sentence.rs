/// Input text held by a worker, with its character-to-byte mapping.
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    input: String,
    c2b: Vec<usize>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.c2b.clear();
    }

    pub fn set_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
        self.c2b.extend(self.input.char_indices().map(|(bi, _)| bi));
        self.c2b.push(self.input.len());
    }

    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// Converts a byte position on a character boundary into a character position.
    #[inline(always)]
    pub fn char_position(&self, pos_byte: usize) -> usize {
        match self.c2b.binary_search(&pos_byte) {
            Ok(i) | Err(i) => i,
        }
    }
}
