use crate::token::TokenKind;

const MAX_COST: f64 = f64::INFINITY;

/// An incoming edge of an offset in the segmentation graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: usize,
    pub cost: f64,
    pub kind: TokenKind,
}

/// The best way found to reach an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestPath {
    pub start: usize,
    pub word_cost: f64,
    pub total_cost: f64,
    pub kind: TokenKind,
}

impl Default for BestPath {
    fn default() -> Self {
        Self {
            start: 0,
            word_cost: 0.0,
            total_cost: MAX_COST,
            kind: TokenKind::Unknown,
        }
    }
}

/// Segmentation graph of one ideograph run and its best-path table.
///
/// Offsets are character positions `0..=len_char`. `ends[e]` lists the
/// incoming edges of `e` in the order they were inserted.
#[derive(Default)]
pub struct Lattice {
    c2b: Vec<usize>,
    ends: Vec<Vec<Edge>>,
    best: Vec<BestPath>,
    len_char: usize, // needed for avoiding to free ends
}

impl Lattice {
    pub fn reset(&mut self, block: &str) {
        self.c2b.clear();
        self.c2b.extend(block.char_indices().map(|(bi, _)| bi));
        self.c2b.push(block.len());
        self.len_char = self.c2b.len() - 1;

        Self::reset_vec(&mut self.ends, self.len_char + 1);
        self.best.clear();
        self.best.resize(self.len_char + 1, BestPath::default());
        self.best[0].total_cost = 0.0;
    }

    fn reset_vec<T>(data: &mut Vec<Vec<T>>, new_len: usize) {
        for v in data.iter_mut() {
            v.clear();
        }
        let cur_len = data.len();
        if cur_len <= new_len {
            data.reserve(new_len - cur_len);
            for _ in cur_len..new_len {
                data.push(Vec::with_capacity(4))
            }
        }
    }

    /// Returns the number of characters of the set block.
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.len_char
    }

    /// Gets the byte position of a character offset in the set block.
    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    /// Gets the substring `[start, end)` of `block` in characters.
    #[inline(always)]
    pub fn substr<'a>(&self, block: &'a str, start: usize, end: usize) -> &'a str {
        &block[self.c2b[start]..self.c2b[end]]
    }

    pub fn insert_edge(&mut self, start: usize, end: usize, cost: f64) {
        debug_assert!(start < end && end <= self.len_char);
        self.ends[end].push(Edge {
            start,
            cost,
            kind: TokenKind::Word,
        });
    }

    /// Inserts the zero-cost single-character edge ending at `end`.
    pub fn insert_fallback(&mut self, end: usize) {
        debug_assert!(0 < end && end <= self.len_char);
        self.ends[end].push(Edge {
            start: end - 1,
            cost: 0.0,
            kind: TokenKind::Unknown,
        });
    }

    /// Checks if there exist at least one edge ending at `i`.
    #[inline(always)]
    pub fn has_previous_edge(&self, i: usize) -> bool {
        self.ends.get(i).map(|d| !d.is_empty()).unwrap_or(false)
    }

    #[inline(always)]
    pub fn predecessors(&self, end: usize) -> &[Edge] {
        &self.ends[end]
    }

    #[inline(always)]
    pub fn best_path(&self, end: usize) -> &BestPath {
        &self.best[end]
    }

    /// Fills the best-path table from left to right.
    ///
    /// Every offset must have an incoming edge. On equal costs the edge
    /// inserted first is kept.
    pub fn solve(&mut self) {
        for end in 1..=self.len_char {
            debug_assert!(self.has_previous_edge(end));
            let mut best = BestPath::default();
            for edge in self.predecessors(end) {
                let cost = self.best[edge.start].total_cost + edge.cost;
                if cost < best.total_cost {
                    best = BestPath {
                        start: edge.start,
                        word_cost: edge.cost,
                        total_cost: cost,
                        kind: edge.kind,
                    };
                }
            }
            self.best[end] = best;
        }
    }

    /// Pushes the end offsets of the best path from the last token to the first.
    pub fn append_top_path(&self, path: &mut Vec<usize>) {
        let mut end = self.len_char;
        while end != 0 {
            path.push(end);
            end = self.best[end].start;
        }
    }
}

impl std::fmt::Debug for Lattice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lattice {{ ends: [")?;
        for (i, (e, b)) in self.ends.iter().zip(&self.best).enumerate() {
            writeln!(f, "{i} => {e:?} best={b:?}")?;
        }
        writeln!(f, "]}}")
    }
}
