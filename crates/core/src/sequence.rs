//! Sequence module - seeded RNG and the bag randomizer
//!
//! Pieces are dealt from a bag holding each of the seven kinds exactly once,
//! in random order. The bag refills only when empty, so any kind repeats at
//! most 12 draws apart. A small seeded LCG keeps whole games reproducible.

use arrayvec::ArrayVec;
use blockfall_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Bag randomizer over the seven piece kinds.
///
/// The pending bag is always a suffix of a random permutation of all seven
/// kinds, or empty immediately before a refill. Consumption pops from the
/// end.
#[derive(Debug, Clone)]
pub struct PieceSequence {
    bag: ArrayVec<PieceKind, 7>,
    rng: SimpleRng,
}

impl PieceSequence {
    /// Create a sequence with the given seed, first bag already dealt.
    pub fn new(seed: u32) -> Self {
        let mut sequence = Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        sequence.refill();
        sequence
    }

    /// Regenerate the bag as a random permutation by select-and-remove:
    /// pick a uniform index into the shrinking working set, move that kind
    /// into the bag, repeat until the working set is empty.
    fn refill(&mut self) {
        let mut working: ArrayVec<PieceKind, 7> = PieceKind::ALL.into_iter().collect();
        while !working.is_empty() {
            let idx = self.rng.next_range(working.len() as u32) as usize;
            self.bag.push(working.remove(idx));
        }
    }

    /// Deal the next piece kind, refilling the bag when it has run out.
    pub fn draw(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.bag.pop() {
                return kind;
            }
            self.refill();
        }
    }

    /// Next kind without consuming it.
    pub fn peek(&self) -> Option<PieceKind> {
        self.bag.last().copied()
    }

    /// Current RNG state (for restarting with a continuing piece stream).
    pub fn seed(&self) -> u32 {
        self.rng.state
    }

    /// Kinds still pending in the current bag, in consumption order
    /// (last element is dealt first).
    #[cfg(test)]
    pub fn pending(&self) -> &[PieceKind] {
        &self.bag
    }
}

impl Default for PieceSequence {
    fn default() -> Self {
        Self::new(1)
    }
}
