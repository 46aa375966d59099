//! Uniform shuffling.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Transform;
use crate::card::Card;

/// Shuffles the sequence into a uniformly random permutation.
///
/// The random source is owned by the transform, so a seeded source gives a
/// reproducible order. Pass `&mut rng` to share a source owned elsewhere.
///
/// # Example
///
/// ```
/// use deckrs::{Shuffle, build_deck};
///
/// let a = build_deck([Shuffle::seeded(7)]);
/// let b = build_deck([Shuffle::seeded(7)]);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Shuffle<R = ChaCha8Rng> {
    rng: R,
}

impl<R: RngCore> Shuffle<R> {
    /// Creates a shuffle drawing from the given random source.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the random source, leaving the shuffle behind.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Shuffle<ChaCha8Rng> {
    /// Creates a shuffle with a `ChaCha8` source seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a shuffle with a `ChaCha8` source seeded by the operating
    /// system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_os_rng())
    }
}

#[cfg(feature = "std")]
impl Default for Shuffle<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RngCore> Transform for Shuffle<R> {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        log::trace!("shuffling {} cards", cards.len());
        cards.shuffle(&mut self.rng);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::standard_deck;

    #[test]
    fn shared_source_advances_between_shuffles() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let first = Shuffle::new(&mut rng).apply(standard_deck());
        let second = Shuffle::new(&mut rng).apply(standard_deck());
        assert_ne!(first, second);

        let mut replay = Shuffle::seeded(3);
        assert_eq!(replay.apply(standard_deck()), first);
        assert_eq!(replay.apply(standard_deck()), second);
    }

    #[test]
    fn empty_and_single_card_sequences() {
        let mut shuffle = Shuffle::seeded(0);
        assert!(shuffle.apply(Vec::new()).is_empty());
        let one = alloc::vec![Card::joker()];
        assert_eq!(shuffle.apply(one.clone()), one);
    }
}
