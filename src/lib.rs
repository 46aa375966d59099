//! A playing-card deck builder with optional `no_std` support.
//!
//! Decks are built from one or more standard 52-card decks in canonical
//! order and then passed through a pipeline of [`Transform`]s such as
//! [`DefaultSort`], [`Shuffle`], [`AddJoker`] and [`FilterRanks`].
//!
//! # Example
//!
//! ```
//! use deckrs::{DeckBuilder, Rank};
//!
//! let cards = DeckBuilder::default()
//!     .with_decks(2)
//!     .with_default_sort()
//!     .with_shuffle_seed(42)
//!     .with_jokers(2)
//!     .with_filtered_ranks([Rank::Ace, Rank::Three])
//!     .build();
//!
//! for card in &cards {
//!     let _ = card.name();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, SUIT_STRIDE, Suit};
pub use deck::{build_deck, build_multi_deck, standard_deck};
pub use error::CardError;
pub use options::DeckBuilder;
pub use transform::{AddJoker, DefaultSort, FilterRanks, Shuffle, Sort, Transform, less};
