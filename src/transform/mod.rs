//! Deck transforms.
//!
//! A [`Transform`] maps an ordered card sequence to a new ordered card
//! sequence. Transforms are applied left to right by the deck builders in
//! [`crate::deck`], each taking ownership of the sequence produced by the
//! previous one.
//!
//! Any `FnMut(Vec<Card>) -> Vec<Card>` closure is also a transform, so ad-hoc
//! stages can be mixed with the provided ones:
//!
//! ```
//! use deckrs::{Card, build_deck};
//!
//! let reversed = build_deck([|mut cards: Vec<Card>| {
//!     cards.reverse();
//!     cards
//! }]);
//! assert_eq!(reversed[0].name(), "King of Hearts");
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;

mod filter;
mod joker;
mod shuffle;
mod sort;

pub use filter::FilterRanks;
pub use joker::AddJoker;
pub use shuffle::Shuffle;
pub use sort::{DefaultSort, Sort, less};

/// A single pipeline stage over an ordered card sequence.
pub trait Transform {
    /// Consumes the sequence and returns the transformed one.
    ///
    /// Implementations may reorder or mutate the vector in place and hand the
    /// same allocation back.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Transform for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

impl Transform for Box<dyn Transform + '_> {
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        (**self).apply(cards)
    }
}

/// Applies each transform in order and returns the final sequence.
pub(crate) fn apply_all<I>(cards: Vec<Card>, transforms: I) -> Vec<Card>
where
    I: IntoIterator,
    I::Item: Transform,
{
    transforms
        .into_iter()
        .fold(cards, |cards, mut transform| transform.apply(cards))
}
