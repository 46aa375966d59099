//! Deck building integration tests.

use std::collections::HashSet;

use deckrs::{
    AddJoker, Card, DECK_SIZE, DeckBuilder, DefaultSort, FilterRanks, Rank, Shuffle, Sort, Suit,
    Transform, build_deck, build_multi_deck, less, standard_deck,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn no_transforms() -> Vec<Box<dyn Transform>> {
    Vec::new()
}

#[test]
fn standard_deck_has_every_card_once() {
    let deck = standard_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(rank, suit)), "missing {rank} of {suit}s");
        }
    }
    assert!(deck.iter().all(|c| !c.is_joker() && c.rank != Rank::Unranked));
}

#[test]
fn standard_deck_order() {
    let deck = standard_deck();
    assert_eq!(deck[0], card(Rank::Ace, Suit::Spade));
    assert_eq!(deck[12], card(Rank::King, Suit::Spade));
    assert_eq!(deck[13], card(Rank::Ace, Suit::Diamond));
    assert_eq!(deck[26], card(Rank::Ace, Suit::Club));
    assert_eq!(deck[39], card(Rank::Ace, Suit::Heart));
    assert_eq!(deck[51], card(Rank::King, Suit::Heart));
}

#[test]
fn build_deck_without_transforms_is_standard() {
    assert_eq!(build_deck(no_transforms()), standard_deck());
}

#[test]
fn multi_deck_lengths() {
    for decks in 0..5 {
        assert_eq!(build_multi_deck(decks, no_transforms()).len(), decks * DECK_SIZE);
    }
}

#[test]
fn zero_decks_still_runs_transforms() {
    let cards = build_multi_deck(0, [AddJoker(3)]);
    assert_eq!(cards, vec![Card::joker(); 3]);
}

#[test]
fn default_sort_restores_canonical_order() {
    let cards = build_deck([
        Box::new(Shuffle::seeded(11)) as Box<dyn Transform>,
        Box::new(AddJoker(1)),
        Box::new(Shuffle::seeded(12)),
        Box::new(DefaultSort),
    ]);

    assert_eq!(cards[..DECK_SIZE], standard_deck()[..]);
    assert_eq!(cards[DECK_SIZE], Card::joker());
    assert!(cards.windows(2).all(|w| less(&w[0], &w[1])));
}

#[test]
fn sorted_single_deck_names() {
    let cards = build_multi_deck(1, [DefaultSort]);
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards.first().map(Card::name).as_deref(), Some("Ace of Spades"));
    assert_eq!(cards.last().map(Card::name).as_deref(), Some("King of Hearts"));
}

#[test]
fn custom_comparator_sort() {
    let by_rank_then_suit = |a: &Card, b: &Card| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.suit.cmp(&b.suit))
    };
    let cards = build_deck([Sort::by(by_rank_then_suit)]);

    assert_eq!(
        cards[..4],
        [
            card(Rank::Ace, Suit::Spade),
            card(Rank::Ace, Suit::Diamond),
            card(Rank::Ace, Suit::Club),
            card(Rank::Ace, Suit::Heart),
        ]
    );
    assert_eq!(cards[51], card(Rank::King, Suit::Heart));
}

#[test]
fn seeded_shuffle_is_reproducible_permutation() {
    let a = build_deck([Shuffle::seeded(42)]);
    let b = build_deck([Shuffle::seeded(42)]);
    let c = build_deck([Shuffle::seeded(43)]);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, standard_deck());

    let mut sorted = a;
    sorted.sort_by_key(Card::absolute_rank);
    assert_eq!(sorted, standard_deck());
}

#[test]
fn add_joker_appends_to_end() {
    let cards = build_deck([AddJoker(1)]);
    assert_eq!(cards.len(), 53);
    assert_eq!(cards[52].name(), "Joker");

    assert_eq!(build_deck([AddJoker(0)]), standard_deck());
}

#[test]
fn filter_ranks_removes_aces() {
    let cards = build_deck([FilterRanks::new([Rank::Ace])]);
    assert_eq!(cards.len(), 48);
    assert!(cards.iter().all(|c| c.rank != Rank::Ace));
}

#[test]
fn filter_after_jokers_keeps_jokers_unless_unranked() {
    let kept = build_deck([
        Box::new(AddJoker(2)) as Box<dyn Transform>,
        Box::new(FilterRanks::new([Rank::King])),
    ]);
    assert_eq!(kept.len(), 50);
    assert_eq!(kept.iter().filter(|c| c.is_joker()).count(), 2);

    let dropped = build_deck([
        Box::new(AddJoker(2)) as Box<dyn Transform>,
        Box::new(FilterRanks::new([Rank::Unranked])),
    ]);
    assert_eq!(dropped, standard_deck());
}

#[test]
fn closures_are_transforms() {
    let mut calls = 0;
    let cards = build_deck([|mut cards: Vec<Card>| {
        calls += 1;
        cards.truncate(5);
        cards
    }]);
    assert_eq!(calls, 1);
    assert_eq!(cards, standard_deck()[..5]);
}

#[test]
fn builder_matches_free_functions() {
    let built = DeckBuilder::default()
        .with_decks(2)
        .with_default_sort()
        .with_shuffle_seed(9)
        .with_jokers(2)
        .with_filtered_ranks([Rank::Ace, Rank::Three])
        .build();

    let piped = build_multi_deck(
        2,
        [
            Box::new(DefaultSort) as Box<dyn Transform>,
            Box::new(Shuffle::seeded(9)),
            Box::new(AddJoker(2)),
            Box::new(FilterRanks::new([Rank::Ace, Rank::Three])),
        ],
    );

    assert_eq!(built, piped);
    assert_eq!(built.len(), 2 * DECK_SIZE + 2 - 16);
    assert_eq!(built.iter().filter(|c| c.is_joker()).count(), 2);
    assert!(
        built
            .iter()
            .all(|c| c.rank != Rank::Ace && c.rank != Rank::Three)
    );
}

#[test]
fn builder_defaults() {
    let builder = DeckBuilder::default();
    assert_eq!(builder.decks(), 1);
    assert_eq!(builder.transform_count(), 0);
    assert_eq!(builder.build(), standard_deck());

    let empty = DeckBuilder::default().with_decks(0).with_default_sort();
    assert_eq!(empty.transform_count(), 1);
    assert!(empty.build().is_empty());
}

#[test]
fn entropy_shuffle_is_a_permutation() {
    let mut cards = DeckBuilder::default().with_shuffle().build();
    cards.sort_by_key(Card::absolute_rank);
    assert_eq!(cards, standard_deck());
}
