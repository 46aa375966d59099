//! Deck configuration.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};
use crate::deck::build_multi_deck;
use crate::transform::{AddJoker, DefaultSort, FilterRanks, Shuffle, Transform};

/// Configuration for building a deck.
///
/// Use the builder pattern to describe the deck, then call
/// [`DeckBuilder::build`]. Transforms run in the order they were added.
///
/// ```
/// use deckrs::{DeckBuilder, Rank};
///
/// let cards = DeckBuilder::default()
///     .with_decks(2)
///     .with_default_sort()
///     .with_shuffle_seed(42)
///     .with_jokers(2)
///     .with_filtered_ranks([Rank::Ace, Rank::Three])
///     .build();
/// assert_eq!(cards.len(), 2 * 52 + 2 - 16);
/// ```
pub struct DeckBuilder {
    /// Number of standard decks to concatenate.
    decks: usize,
    /// Transforms, in application order.
    transforms: Vec<Box<dyn Transform>>,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self {
            decks: 1,
            transforms: Vec::new(),
        }
    }
}

impl fmt::Debug for DeckBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("decks", &self.decks)
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

impl DeckBuilder {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let builder = DeckBuilder::default().with_decks(6);
    /// assert_eq!(builder.decks(), 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Appends a transform to the pipeline.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{AddJoker, DeckBuilder};
    ///
    /// let builder = DeckBuilder::default().with_transform(AddJoker(1));
    /// assert_eq!(builder.transform_count(), 1);
    /// assert_eq!(builder.build().len(), 53);
    /// ```
    #[must_use]
    pub fn with_transform<T>(mut self, transform: T) -> Self
    where
        T: Transform + 'static,
    {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Appends a [`DefaultSort`].
    #[must_use]
    pub fn with_default_sort(self) -> Self {
        self.with_transform(DefaultSort)
    }

    /// Appends a [`Shuffle`] seeded from `seed`.
    #[must_use]
    pub fn with_shuffle_seed(self, seed: u64) -> Self {
        self.with_transform(Shuffle::seeded(seed))
    }

    /// Appends a [`Shuffle`] seeded by the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn with_shuffle(self) -> Self {
        self.with_transform(Shuffle::from_entropy())
    }

    /// Appends an [`AddJoker`] adding `count` jokers.
    #[must_use]
    pub fn with_jokers(self, count: usize) -> Self {
        self.with_transform(AddJoker(count))
    }

    /// Appends a [`FilterRanks`] removing the given ranks.
    #[must_use]
    pub fn with_filtered_ranks<I>(self, ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        self.with_transform(FilterRanks::new(ranks))
    }

    /// Returns the configured number of decks.
    #[must_use]
    pub const fn decks(&self) -> usize {
        self.decks
    }

    /// Returns the number of transforms added so far.
    #[must_use]
    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    /// Builds the deck, consuming the builder.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        build_multi_deck(self.decks, self.transforms)
    }
}
