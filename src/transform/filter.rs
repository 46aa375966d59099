//! Rank filtering.

use alloc::vec::Vec;

use super::Transform;
use crate::card::{Card, Rank};

/// Removes every card whose rank is in the filtered set.
///
/// Surviving cards keep their relative order.
///
/// Jokers carry [`Rank::Unranked`], so filtering `Unranked` also removes all
/// jokers. The rank check is applied uniformly; there is no joker exemption.
///
/// # Example
///
/// ```
/// use deckrs::{AddJoker, FilterRanks, Rank, build_deck};
///
/// let deck = build_deck([
///     Box::new(AddJoker(2)) as Box<dyn deckrs::Transform>,
///     Box::new(FilterRanks::new([Rank::Ace, Rank::Unranked])),
/// ]);
/// assert_eq!(deck.len(), 48);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilterRanks {
    /// Bit `n` set means rank ordinal `n` is removed.
    mask: u16,
}

impl FilterRanks {
    /// Creates a filter removing the given ranks.
    #[must_use]
    pub fn new<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        ranks.into_iter().fold(Self::default(), Self::with)
    }

    /// Adds a rank to the filtered set.
    #[must_use]
    pub const fn with(self, rank: Rank) -> Self {
        Self {
            mask: self.mask | (1 << rank.value()),
        }
    }

    /// Returns whether cards of this rank are removed.
    #[must_use]
    pub const fn contains(&self, rank: Rank) -> bool {
        self.mask & (1 << rank.value()) != 0
    }

    /// Returns whether no rank is filtered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

impl FromIterator<Rank> for FilterRanks {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Transform for FilterRanks {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        let before = cards.len();
        cards.retain(|card| !self.contains(card.rank));
        log::trace!("filtered {} of {} cards", before - cards.len(), before);
        cards
    }
}
