//! Deck construction.
//!
//! Every builder starts from one or more standard decks in the canonical
//! order and then runs the supplied transforms, left to right, over the
//! combined sequence.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::transform::{self, Transform};

/// Returns one standard 52-card deck in canonical order.
///
/// Suits run spades, diamonds, clubs, hearts; within each suit, Ace through
/// King.
///
/// # Example
///
/// ```
/// use deckrs::{DECK_SIZE, standard_deck};
///
/// let deck = standard_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].name(), "Ace of Spades");
/// assert_eq!(deck[51].name(), "King of Hearts");
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    push_standard(&mut cards);
    cards
}

fn push_standard(cards: &mut Vec<Card>) {
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
}

/// Builds one standard deck and applies each transform in order.
///
/// # Example
///
/// ```
/// use deckrs::{AddJoker, build_deck};
///
/// let deck = build_deck([AddJoker(1)]);
/// assert_eq!(deck.len(), 53);
/// assert_eq!(deck[52].name(), "Joker");
/// ```
pub fn build_deck<I>(transforms: I) -> Vec<Card>
where
    I: IntoIterator,
    I::Item: Transform,
{
    build_multi_deck(1, transforms)
}

/// Concatenates `decks` standard decks and applies each transform in order.
///
/// Transforms run once over the combined sequence, not per deck. Zero decks
/// yields an empty sequence before the transforms run.
///
/// # Example
///
/// ```
/// use deckrs::{DefaultSort, build_multi_deck};
///
/// let shoe = build_multi_deck(2, [DefaultSort]);
/// assert_eq!(shoe.len(), 104);
/// assert_eq!(shoe[0], shoe[1]);
/// ```
pub fn build_multi_deck<I>(decks: usize, transforms: I) -> Vec<Card>
where
    I: IntoIterator,
    I::Item: Transform,
{
    let mut cards = Vec::with_capacity(decks * DECK_SIZE);
    for _ in 0..decks {
        push_standard(&mut cards);
    }
    log::debug!("built {decks} deck(s), {} cards", cards.len());

    let cards = transform::apply_all(cards, transforms);
    log::debug!("pipeline finished with {} cards", cards.len());
    cards
}
