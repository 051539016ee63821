//! Matching-block sequence similarity.
//!
//! Implements the Ratcliff/Obershelp "gestalt" comparison: find the longest
//! common contiguous block, then recurse into the unmatched text on either
//! side of it. The similarity ratio is
//!
//! ```text
//! ratio = 2 * M / (len(a) + len(b))
//! ```
//!
//! where `M` is the total size of all matching blocks. Two empty sequences
//! have ratio 1.0. Strings are compared by Unicode scalar values, not bytes.
//!
//! Ties between equally long blocks resolve to the block that ends earliest
//! in `a`, then starts earliest in `b`, which keeps results identical to the
//! conventional matcher used by most fuzzy-matching libraries.

/// A run of equal elements: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Compares two character sequences by their matching blocks.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
}

impl SequenceMatcher {
    /// Create a matcher for two strings.
    pub fn new(a: &str, b: &str) -> Self {
        SequenceMatcher {
            a: a.chars().collect(),
            b: b.chars().collect(),
        }
    }

    /// Longest matching block within `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
    ///
    /// Returns a zero-sized block at `(a_lo, b_lo)` when nothing matches.
    pub fn find_longest_match(
        &self,
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> MatchingBlock {
        let mut best = MatchingBlock {
            a_start: a_lo,
            b_start: b_lo,
            size: 0,
        };
        if a_lo >= a_hi || b_lo >= b_hi {
            return best;
        }

        // run_len[j + 1] is the length of the common run ending at a[i], b[j].
        let width = b_hi - b_lo;
        let mut prev = vec![0usize; width + 1];
        let mut curr = vec![0usize; width + 1];

        for i in a_lo..a_hi {
            for j in b_lo..b_hi {
                let col = j - b_lo;
                curr[col + 1] = if self.a[i] == self.b[j] {
                    prev[col] + 1
                } else {
                    0
                };
                let run = curr[col + 1];
                if run > best.size {
                    best = MatchingBlock {
                        a_start: i + 1 - run,
                        b_start: j + 1 - run,
                        size: run,
                    };
                }
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        best
    }

    /// All matching blocks, ordered by position in `a`.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
            let block = self.find_longest_match(a_lo, a_hi, b_lo, b_hi);
            if block.size == 0 {
                continue;
            }
            if a_lo < block.a_start && b_lo < block.b_start {
                pending.push((a_lo, block.a_start, b_lo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < a_hi && b_end < b_hi {
                pending.push((a_end, a_hi, b_end, b_hi));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.a_start, block.b_start));
        blocks
    }

    /// Total number of matched characters.
    pub fn matches(&self) -> usize {
        self.matching_blocks().iter().map(|block| block.size).sum()
    }

    /// Similarity ratio in `[0, 1]`; 1.0 means identical.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matches() as f64 / total as f64
    }
}

/// Similarity ratio of two strings.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}
