//! Joker insertion.

use alloc::vec::Vec;

use super::Transform;
use crate::card::Card;

/// Appends the given number of jokers to the end of the sequence.
///
/// `AddJoker(0)` leaves the sequence unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AddJoker(pub usize);

impl Transform for AddJoker {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        log::trace!("adding {} jokers", self.0);
        cards.extend(core::iter::repeat_n(Card::joker(), self.0));
        cards
    }
}
