//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use crate::error::CardError;

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;

/// Slots reserved per suit in [`Card::absolute_rank`].
///
/// Ranks run 1 through 13, so suit boundaries never collide.
pub const SUIT_STRIDE: u8 = 20;

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Rank {
    /// The "no rank" value carried by jokers.
    #[default]
    Unranked = 0,
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// The standard ranks, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank's ordinal (`Unranked` is 0, Ace is 1, King is 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the canonical name of the rank.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unranked => "Unranked",
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unranked),
            1..=13 => Ok(Self::ALL[usize::from(value) - 1]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        core::iter::once(Self::Unranked)
            .chain(Self::ALL)
            .find(|rank| rank.as_str().eq_ignore_ascii_case(s))
            .ok_or(CardError::UnknownRank)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Marks a joker; such cards have no rank.
    Joker = 4,
}

impl Suit {
    /// The four standard suits in canonical deck order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the suit's ordinal in declaration order (Spade is 0, Joker is 4).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the canonical singular name of the suit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0..=3 => Ok(Self::STANDARD[usize::from(value)]),
            4 => Ok(Self::Joker),
            _ => Err(CardError::InvalidSuit(value)),
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::STANDARD
            .into_iter()
            .chain(core::iter::once(Self::Joker))
            .find(|suit| suit.as_str().eq_ignore_ascii_case(s))
            .ok_or(CardError::UnknownSuit)
    }
}

/// A playing card.
///
/// A joker is a card whose suit is [`Suit::Joker`]; its rank is
/// [`Rank::Unranked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not check that the rank and suit agree. Use
    /// [`Card::try_new`] for a checked constructor, or [`Card::joker`] for
    /// jokers.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card, rejecting ranked jokers and unranked standard cards.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankedJoker`] or [`CardError::UnrankedCard`] when
    /// the rank and suit are inconsistent.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, CardError, Rank, Suit};
    ///
    /// assert!(Card::try_new(Rank::Ace, Suit::Spade).is_ok());
    /// assert_eq!(
    ///     Card::try_new(Rank::Ace, Suit::Joker),
    ///     Err(CardError::RankedJoker(Rank::Ace))
    /// );
    /// ```
    pub const fn try_new(rank: Rank, suit: Suit) -> Result<Self, CardError> {
        match (rank, suit) {
            (Rank::Unranked, Suit::Joker) => Ok(Self::joker()),
            (rank, Suit::Joker) => Err(CardError::RankedJoker(rank)),
            (Rank::Unranked, suit) => Err(CardError::UnrankedCard(suit)),
            (rank, suit) => Ok(Self::new(rank, suit)),
        }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Rank::Unranked, Suit::Joker)
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the key used by the default ordering: `suit * 20 + rank`.
    ///
    /// All spades come before diamonds, diamonds before clubs, clubs before
    /// hearts and hearts before jokers; within a suit, ranks increase.
    #[must_use]
    pub const fn absolute_rank(&self) -> u8 {
        self.suit.index() * SUIT_STRIDE + self.rank.value()
    }

    /// Returns the display name of the card.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Rank::Queen, Suit::Heart).name(), "Queen of Hearts");
    /// assert_eq!(Card::joker().name(), "Joker");
    /// ```
    #[must_use]
    pub fn name(&self) -> String {
        use alloc::string::ToString;

        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            f.write_str(self.suit.as_str())
        } else {
            write!(f, "{} of {}s", self.rank, self.suit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_round_trips_through_u8_and_name() {
        for rank in Rank::ALL {
            assert_eq!(Rank::try_from(rank.value()), Ok(rank));
            assert_eq!(rank.as_str().parse::<Rank>(), Ok(rank));
        }
        assert_eq!(Rank::try_from(0), Ok(Rank::Unranked));
        assert_eq!(Rank::try_from(14), Err(CardError::InvalidRank(14)));
        assert_eq!(" king ".parse::<Rank>(), Ok(Rank::King));
        assert_eq!("Knight".parse::<Rank>(), Err(CardError::UnknownRank));
    }

    #[test]
    fn suit_parsing() {
        assert_eq!(Suit::try_from(4), Ok(Suit::Joker));
        assert_eq!(Suit::try_from(5), Err(CardError::InvalidSuit(5)));
        assert_eq!("DIAMOND".parse::<Suit>(), Ok(Suit::Diamond));
        assert_eq!("Cups".parse::<Suit>(), Err(CardError::UnknownSuit));
    }

    #[test]
    fn absolute_rank_orders_suits_then_ranks() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spade).absolute_rank(), 1);
        assert_eq!(Card::new(Rank::King, Suit::Spade).absolute_rank(), 13);
        assert_eq!(Card::new(Rank::Ace, Suit::Diamond).absolute_rank(), 21);
        assert_eq!(Card::new(Rank::King, Suit::Heart).absolute_rank(), 73);
        assert_eq!(Card::joker().absolute_rank(), 80);
    }

    #[test]
    fn joker_name_ignores_rank() {
        assert_eq!(Card::new(Rank::Five, Suit::Joker).name(), "Joker");
        assert_eq!(Card::new(Rank::Ten, Suit::Club).name(), "Ten of Clubs");
        assert_eq!(
            Card::try_new(Rank::Unranked, Suit::Club),
            Err(CardError::UnrankedCard(Suit::Club))
        );
    }
}
