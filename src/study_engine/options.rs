//! Distractor selection: picks plausible wrong answers for one record.
//!
//! Candidates are drawn in three tiers, each visited in random order:
//!
//! 1. the record's own curated distractors
//! 2. answers of other records in the same category
//! 3. answers of every other record in the bank
//!
//! A candidate is admitted only if it is non-empty after trimming and its
//! trimmed, lower-cased form matches neither the correct answer nor an
//! already admitted candidate.

use std::collections::HashSet;

use rand::Rng;
use crate::study_engine::{
    models::{OptionSet, SourceRecord},
    shuffle::{shuffle, shuffled},
};

/// Comparison key used for answer de-duplication.
pub fn answer_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Accumulates admitted wrong answers up to `wanted`.
struct Candidates {
    answer_key: String,
    seen: HashSet<String>,
    picked: Vec<String>,
    wanted: usize,
}

impl Candidates {
    fn new(answer: &str, wanted: usize) -> Self {
        Candidates {
            answer_key: answer_key(answer),
            seen: HashSet::new(),
            picked: Vec::with_capacity(wanted),
            wanted,
        }
    }

    fn is_full(&self) -> bool {
        self.picked.len() >= self.wanted
    }

    fn admit(&mut self, text: &str) {
        if self.is_full() {
            return;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let key = trimmed.to_lowercase();
        if key == self.answer_key || !self.seen.insert(key) {
            return;
        }
        self.picked.push(trimmed.to_string());
    }

    /// Visit `texts` in random order until full or exhausted.
    fn fill_from<R: Rng + ?Sized>(&mut self, texts: &[&str], rng: &mut R) {
        if self.is_full() {
            return;
        }
        for text in shuffled(texts, rng) {
            if self.is_full() {
                break;
            }
            self.admit(text);
        }
    }
}

/// Build the answer options for `source`.
///
/// `category_pool` and `global_pool` should already exclude `source`;
/// records sharing its id are skipped regardless. `distractors` is the
/// number of wrong answers wanted. When the bank cannot supply that many
/// distinct answers the option list is shorter, but `answer_index` always
/// points at the correct answer.
pub fn build_options<R: Rng + ?Sized>(
    source: &SourceRecord,
    category_pool: &[&SourceRecord],
    global_pool: &[&SourceRecord],
    distractors: usize,
    rng: &mut R,
) -> OptionSet {
    let mut candidates = Candidates::new(&source.answer, distractors);

    let curated: Vec<&str> = source.distractors().iter().map(String::as_str).collect();
    candidates.fill_from(&curated, rng);

    for pool in [category_pool, global_pool] {
        let answers: Vec<&str> = pool
            .iter()
            .filter(|record| record.id != source.id)
            .map(|record| record.answer.as_str())
            .collect();
        candidates.fill_from(&answers, rng);
    }

    let mut options = Vec::with_capacity(candidates.picked.len() + 1);
    options.push(source.answer.trim().to_string());
    options.extend(candidates.picked);
    shuffle(&mut options, rng);

    let key = candidates.answer_key;
    let answer_index = options
        .iter()
        .position(|option| answer_key(option) == key)
        .unwrap_or_default();

    OptionSet { options, answer_index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_engine::shuffle::make_rng;

    fn rec(id: &str, answer: &str, category: &str) -> SourceRecord {
        SourceRecord {
            id: id.to_string(),
            prompt: format!("Prompt {id}"),
            answer: answer.to_string(),
            distractors: None,
            reference: String::new(),
            category: category.to_string(),
            image: None,
        }
    }

    fn keys(options: &[String]) -> HashSet<String> {
        options.iter().map(|o| answer_key(o)).collect()
    }

    #[test]
    fn curated_distractors_fill_first() {
        let mut source = rec("A", "Yield", "Signs");
        source.distractors = Some(vec!["Stop".into(), "Merge".into(), "Detour".into()]);
        let other = rec("B", "Speed Limit", "Signs");
        let pool = [&other];

        for seed in 0..20 {
            let mut rng = make_rng(Some(seed));
            let set = build_options(&source, &pool, &pool, 3, &mut rng);
            let expected: HashSet<String> =
                ["yield", "stop", "merge", "detour"].iter().map(|s| s.to_string()).collect();
            assert_eq!(keys(&set.options), expected);
            assert_eq!(set.options[set.answer_index], "Yield");
        }
    }

    #[test]
    fn distractor_equal_to_answer_is_skipped() {
        let mut source = rec("A", "Yield", "Signs");
        source.distractors = Some(vec![" yield ".into(), "".into(), "Stop".into()]);
        let b = rec("B", "Merge", "Signs");
        let c = rec("C", "Detour", "Other");
        let category_pool = [&b];
        let global_pool = [&b, &c];

        let mut rng = make_rng(Some(3));
        let set = build_options(&source, &category_pool, &global_pool, 3, &mut rng);
        assert_eq!(set.options.len(), 4);
        assert_eq!(keys(&set.options).len(), 4);
        assert_eq!(set.options.iter().filter(|o| answer_key(o) == "yield").count(), 1);
    }

    #[test]
    fn category_pool_is_preferred_over_global_pool() {
        let source = rec("A", "Yield", "Signs");
        let signs = [rec("B", "Stop", "Signs"), rec("C", "Merge", "Signs"), rec("D", "Detour", "Signs")];
        let rules = [rec("E", "30 mph", "Speed"), rec("F", "70 mph", "Speed")];
        let category_pool: Vec<&SourceRecord> = signs.iter().collect();
        let global_pool: Vec<&SourceRecord> = signs.iter().chain(rules.iter()).collect();

        for seed in 0..20 {
            let mut rng = make_rng(Some(seed));
            let set = build_options(&source, &category_pool, &global_pool, 3, &mut rng);
            assert!(set.options.iter().all(|o| !o.contains("mph")), "seed {seed}: {:?}", set.options);
        }
    }

    #[test]
    fn tiny_bank_yields_short_option_list() {
        let source = rec("A", "Yield", "Signs");
        let b = rec("B", "Stop", "Signs");
        let pool = [&b];
        let mut rng = make_rng(Some(11));
        let set = build_options(&source, &pool, &pool, 3, &mut rng);
        assert_eq!(set.options.len(), 2);
        assert_eq!(set.options[set.answer_index], "Yield");
    }

    #[test]
    fn source_id_in_pool_is_ignored() {
        let source = rec("A", "Yield", "Signs");
        let pool = [&source];
        let mut rng = make_rng(Some(5));
        let set = build_options(&source, &pool, &pool, 3, &mut rng);
        assert_eq!(set.options, vec!["Yield".to_string()]);
        assert_eq!(set.answer_index, 0);
    }
}
