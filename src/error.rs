//! Error types for card construction and parsing.
//!
//! Deck building and transforms are total and never fail; these errors only
//! come from the checked conversions on [`Rank`], [`Suit`] and [`Card`].
//!
//! [`Card`]: crate::Card

use thiserror::Error;

use crate::card::{Rank, Suit};

/// Errors that can occur when converting into or validating cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank ordinal outside `0..=13`.
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
    /// Suit ordinal outside `0..=4`.
    #[error("invalid suit value {0}")]
    InvalidSuit(u8),
    /// Rank name not recognised.
    #[error("unknown rank name")]
    UnknownRank,
    /// Suit name not recognised.
    #[error("unknown suit name")]
    UnknownSuit,
    /// A joker was given a real rank.
    #[error("joker cannot carry rank {0}")]
    RankedJoker(Rank),
    /// A standard suit was given the unranked value.
    #[error("{0} card must have a rank")]
    UnrankedCard(Suit),
}
