//! Bounded selection of the highest-entropy guesses.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::word::Word;

/// A guess and the entropy (bits) it scored.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub guess: Word,
    pub entropy: f64,
}

impl Scored {
    pub fn new(guess: Word, entropy: f64) -> Self {
        Self { guess, entropy }
    }

    /// Expected size of the candidate set after playing this guess against
    /// `remaining` candidates.
    pub fn expected_remaining(&self, remaining: usize) -> f64 {
        remaining as f64 / self.entropy.exp2()
    }
}

/// Orders [`Scored`] by entropy alone.
#[derive(Debug)]
struct ByEntropy(Scored);

impl PartialEq for ByEntropy {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByEntropy {}

impl PartialOrd for ByEntropy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByEntropy {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.entropy.total_cmp(&other.0.entropy)
    }
}

/// Keeps the `k` highest-entropy items pushed into it.
///
/// Backed by a min-heap: the root is the weakest item retained, so a new
/// item only has to beat the root to get in.
#[derive(Debug)]
pub struct TopK {
    k: usize,
    heap: BinaryHeap<Reverse<ByEntropy>>,
}

impl TopK {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k),
        }
    }

    pub fn capacity(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The lowest-entropy item currently retained.
    pub fn peek_min(&self) -> Option<&Scored> {
        self.heap.peek().map(|Reverse(ByEntropy(s))| s)
    }

    /// Offer `item`. Once full, it replaces the minimum only when its entropy
    /// is strictly greater.
    pub fn push(&mut self, item: Scored) {
        if self.heap.len() < self.k {
            self.heap.push(Reverse(ByEntropy(item)));
            return;
        }
        if let Some(mut min) = self.heap.peek_mut() {
            if item.entropy > min.0 .0.entropy {
                // sifts down when `min` drops
                *min = Reverse(ByEntropy(item));
            }
        }
    }

    /// Remove everything, highest entropy first.
    pub fn drain(&mut self) -> Vec<Scored> {
        let mut items: Vec<Scored> = self
            .heap
            .drain()
            .map(|Reverse(ByEntropy(s))| s)
            .collect();
        items.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
        items
    }
}

impl Extend<Scored> for TopK {
    fn extend<I: IntoIterator<Item = Scored>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
