use log::debug;
use rand::Rng;

use crate::study_engine::{
    config::DeckConfig,
    models::{CategoryFilter, Deck, DeckCard, SourceRecord},
    options::build_options,
    shuffle::shuffle,
};

/// Records in `bank` that pass `filter`, in bank order.
pub fn filter_sources<'a>(bank: &'a [SourceRecord], filter: &CategoryFilter) -> Vec<&'a SourceRecord> {
    bank.iter().filter(|record| filter.matches(record)).collect()
}

/// Random subset of `min(size, bank.len())` distinct records.
pub fn sample_practice<'a, R: Rng + ?Sized>(
    bank: &'a [SourceRecord],
    size: usize,
    rng: &mut R,
) -> Vec<&'a SourceRecord> {
    let mut picked: Vec<&SourceRecord> = bank.iter().collect();
    shuffle(&mut picked, rng);
    picked.truncate(size);
    picked
}

/// Turn `sources` into a shuffled deck.
///
/// Each card draws its distractors from `global_pool` (same-category
/// records first, then the whole pool), never from itself. The deck order
/// is shuffled independently of the option order inside each card.
pub fn build_deck<R: Rng + ?Sized>(
    sources: &[&SourceRecord],
    global_pool: &[SourceRecord],
    config: &DeckConfig,
    rng: &mut R,
) -> Deck {
    if sources.is_empty() {
        return Vec::new();
    }

    let mut deck: Deck = sources
        .iter()
        .map(|&source| {
            let others: Vec<&SourceRecord> =
                global_pool.iter().filter(|r| r.id != source.id).collect();
            let same_category: Vec<&SourceRecord> =
                others.iter().copied().filter(|r| r.category == source.category).collect();
            let option_set =
                build_options(source, &same_category, &others, config.distractor_count(), rng);
            DeckCard::from_source(source, option_set)
        })
        .collect();

    shuffle(&mut deck, rng);
    debug!("built deck of {} cards", deck.len());
    deck
}
