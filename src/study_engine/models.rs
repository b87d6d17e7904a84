use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question bank records
// ---------------------------------------------------------------------------

/// One authored flashcard entry from the question bank.
///
/// Records are read-only once loaded. `distractors` may be absent or `null`
/// in the bank file; both are treated as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: String,
    pub prompt: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distractors: Option<Vec<String>>,
    #[serde(default)]
    pub reference: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SourceRecord {
    /// Curated wrong answers, empty when the record carries none.
    pub fn distractors(&self) -> &[String] {
        self.distractors.as_deref().unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Filters and modes
// ---------------------------------------------------------------------------

/// Topic filter applied to the bank before a study deck is built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, record: &SourceRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All topics"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Study,
    PracticeTest,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Study        => write!(f, "Study"),
            Mode::PracticeTest => write!(f, "Practice Test"),
        }
    }
}

// ---------------------------------------------------------------------------
// Built cards
// ---------------------------------------------------------------------------

/// Answer options for one card plus the position of the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub options: Vec<String>,
    pub answer_index: usize,
}

/// A shuffled, answerable multiple-choice rendering of one [`SourceRecord`].
///
/// `options` never holds two entries that are equal after trimming and
/// case-folding, and `options[answer_index]` is the source answer. A tiny
/// bank can yield fewer than four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCard {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
    pub answer: String,
    pub reference: String,
    pub category: String,
    pub image: Option<String>,
}

impl DeckCard {
    pub fn from_source(source: &SourceRecord, option_set: OptionSet) -> Self {
        DeckCard {
            id: source.id.clone(),
            prompt: source.prompt.clone(),
            options: option_set.options,
            answer_index: option_set.answer_index,
            answer: source.answer.clone(),
            reference: source.reference.clone(),
            category: source.category.clone(),
            image: source.image.clone(),
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.answer_index
    }
}

/// An ordered deck. Always rebuilt wholesale, never edited in place.
pub type Deck = Vec<DeckCard>;
