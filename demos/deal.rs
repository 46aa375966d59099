//! Deals two shuffled decks with jokers, minus aces and threes.
//!
//! Pass `--seed N` for a reproducible order. Set `RUST_LOG=deckrs=trace` to
//! see each pipeline stage.

use deckrs::{DeckBuilder, Rank};

fn main() {
    env_logger::init();

    let seed = parse_seed(std::env::args().skip(1));

    let builder = DeckBuilder::default().with_decks(2).with_default_sort();
    let builder = match seed {
        Some(seed) => builder.with_shuffle_seed(seed),
        None => builder.with_shuffle(),
    };
    let cards = builder
        .with_jokers(2)
        .with_filtered_ranks([Rank::Ace, Rank::Three])
        .build();

    println!("Got deck with {} cards", cards.len());
    for card in &cards {
        println!("{}", card.name());
    }
}

fn parse_seed(mut args: impl Iterator<Item = String>) -> Option<u64> {
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            return args.next().and_then(|value| value.parse().ok());
        }
        if let Some(value) = arg.strip_prefix("--seed=") {
            return value.parse().ok();
        }
    }
    None
}
