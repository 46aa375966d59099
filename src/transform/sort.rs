//! Sorting transforms.

use core::cmp::Ordering;

use alloc::vec::Vec;

use super::Transform;
use crate::card::Card;

/// Returns whether `a` comes before `b` in the default deck order.
///
/// The order compares [`Card::absolute_rank`]: suits in declaration order
/// (spades, diamonds, clubs, hearts, jokers), then increasing rank.
#[must_use]
pub const fn less(a: &Card, b: &Card) -> bool {
    a.absolute_rank() < b.absolute_rank()
}

fn default_order(a: &Card, b: &Card) -> Ordering {
    a.absolute_rank().cmp(&b.absolute_rank())
}

/// Sorts the sequence with a caller-supplied comparator.
///
/// The sort is unstable: cards the comparator considers equal may end up in
/// any relative order.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Sort, build_deck};
///
/// // Kings first.
/// let deck = build_deck([Sort::by(|a: &Card, b: &Card| b.rank.cmp(&a.rank))]);
/// assert_eq!(deck[0].name().split(' ').next(), Some("King"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sort<F> {
    compare: F,
}

impl<F> Sort<F>
where
    F: FnMut(&Card, &Card) -> Ordering,
{
    /// Creates a sort transform from a comparator.
    #[must_use]
    pub const fn by(compare: F) -> Self {
        Self { compare }
    }
}

impl Sort<fn(&Card, &Card) -> Ordering> {
    /// Creates a sort transform using the default deck order.
    ///
    /// Equivalent to [`DefaultSort`].
    #[must_use]
    pub const fn default_order() -> Self {
        Self::by(default_order)
    }
}

impl<F> Transform for Sort<F>
where
    F: FnMut(&Card, &Card) -> Ordering,
{
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        log::trace!("sorting {} cards", cards.len());
        cards.sort_unstable_by(&mut self.compare);
        cards
    }
}

/// Sorts the sequence into the default deck order.
///
/// Spades Ace through King, then diamonds, clubs and hearts, with jokers
/// last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultSort;

impl Transform for DefaultSort {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        log::trace!("default-sorting {} cards", cards.len());
        cards.sort_unstable_by_key(Card::absolute_rank);
        cards
    }
}
