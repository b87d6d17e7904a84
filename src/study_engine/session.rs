//! Session state machine.
//!
//! A [`Session`] is a plain value. [`Session::apply`] consumes it together
//! with an [`Action`] and returns the next session. Actions that make no
//! sense in the current [`Phase`] return the session unchanged.
//!
//! | Phase               | Accepted actions |
//! |---------------------|------------------|
//! | `StudyAnswering`    | select option, filter, shuffle, start test |
//! | `StudyRevealed`     | next, filter, shuffle, start test |
//! | `PracticeAnswering` | select option, filter, exit test |
//! | `PracticeRevealed`  | next, filter, exit test |
//! | `PracticeSummary`   | retake test, filter, exit test |
//! | `EmptyDeck`         | filter, shuffle, start test (exit test in practice mode) |

use std::fmt;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::study_engine::{
    bank::QuestionBank,
    builder::{build_deck, filter_sources, sample_practice},
    config::DeckConfig,
    models::{CategoryFilter, Deck, DeckCard, Mode},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    StudyAnswering,
    StudyRevealed,
    PracticeAnswering,
    PracticeRevealed,
    PracticeSummary,
    EmptyDeck,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::StudyAnswering    => "Study.Answering",
            Phase::StudyRevealed     => "Study.Revealed",
            Phase::PracticeAnswering => "PracticeTest.Answering",
            Phase::PracticeRevealed  => "PracticeTest.Revealed",
            Phase::PracticeSummary   => "PracticeTest.Summary",
            Phase::EmptyDeck         => "EmptyDeck",
        };
        write!(f, "{}", s)
    }
}

/// User-initiated events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SelectFilter(CategoryFilter),
    SelectOption(usize),
    Next,
    Shuffle,
    StartPracticeTest,
    ExitPracticeTest,
    RetakePracticeTest,
}

/// Result of a finished practice test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub percent: u32,
    pub passed: bool,
}

impl Summary {
    pub fn new(correct: usize, total: usize, pass_threshold: u32) -> Self {
        let percent = percent_of(correct, total);
        Summary {
            correct,
            incorrect: total.saturating_sub(correct),
            total,
            percent,
            passed: total > 0 && percent >= pass_threshold,
        }
    }
}

/// `round(100 * part / whole)`, 0 when `whole` is 0.
pub fn percent_of(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    config: DeckConfig,
    mode: Mode,
    filter: CategoryFilter,
    deck: Deck,
    position: usize,
    selection: Option<usize>,
    correct: usize,
    summary_shown: bool,
}

impl Session {
    /// Study session over the whole bank.
    pub fn new<R: Rng + ?Sized>(bank: &QuestionBank, config: DeckConfig, rng: &mut R) -> Self {
        Self::study(bank, config, CategoryFilter::All, rng)
    }

    /// Fresh study session for `filter` with position, selection and score reset.
    pub fn study<R: Rng + ?Sized>(
        bank: &QuestionBank,
        config: DeckConfig,
        filter: CategoryFilter,
        rng: &mut R,
    ) -> Self {
        let sources = filter_sources(bank.records(), &filter);
        let deck = build_deck(&sources, bank.records(), &config, rng);
        info!("study deck for {}: {} cards", filter, deck.len());
        Self::fresh(config, Mode::Study, filter, deck)
    }

    /// Fresh practice test over a random sample of the whole bank.
    ///
    /// The active filter is kept so exiting the test can restore it, but it
    /// does not restrict the sample.
    pub fn practice<R: Rng + ?Sized>(
        bank: &QuestionBank,
        config: DeckConfig,
        filter: CategoryFilter,
        rng: &mut R,
    ) -> Self {
        let sources = sample_practice(bank.records(), config.practice_size, rng);
        let deck = build_deck(&sources, bank.records(), &config, rng);
        info!("practice test started with {} cards", deck.len());
        Self::fresh(config, Mode::PracticeTest, filter, deck)
    }

    fn fresh(config: DeckConfig, mode: Mode, filter: CategoryFilter, deck: Deck) -> Self {
        Session {
            config,
            mode,
            filter,
            deck,
            position: 0,
            selection: None,
            correct: 0,
            summary_shown: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.deck.is_empty() {
            return Phase::EmptyDeck;
        }
        match (self.mode, self.summary_shown, self.selection.is_some()) {
            (Mode::Study, _, false)               => Phase::StudyAnswering,
            (Mode::Study, _, true)                => Phase::StudyRevealed,
            (Mode::PracticeTest, true, _)         => Phase::PracticeSummary,
            (Mode::PracticeTest, false, false)    => Phase::PracticeAnswering,
            (Mode::PracticeTest, false, true)     => Phase::PracticeRevealed,
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn deck(&self) -> &[DeckCard] {
        &self.deck
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Correct answers so far. Only practice tests keep score.
    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn current_card(&self) -> Option<&DeckCard> {
        if self.summary_shown {
            return None;
        }
        self.deck.get(self.position)
    }

    /// Score summary, available once a practice test is finished.
    pub fn summary(&self) -> Option<Summary> {
        match self.phase() {
            Phase::PracticeSummary => Some(Summary::new(
                self.correct,
                self.deck.len(),
                self.config.pass_threshold,
            )),
            _ => None,
        }
    }

    /// Apply one user action and return the next session.
    pub fn apply<R: Rng + ?Sized>(self, action: Action, bank: &QuestionBank, rng: &mut R) -> Session {
        let phase = self.phase();
        debug!("{:?} in {}", action, phase);

        match action {
            Action::SelectFilter(filter) => Self::study(bank, self.config, filter, rng),

            Action::SelectOption(option) => match phase {
                Phase::StudyAnswering | Phase::PracticeAnswering => self.select(option),
                _ => self.ignored(),
            },

            Action::Next => match phase {
                Phase::StudyRevealed | Phase::PracticeRevealed => self.advance(bank, rng),
                _ => self.ignored(),
            },

            Action::Shuffle if self.mode == Mode::Study => {
                Self::study(bank, self.config, self.filter, rng)
            }

            Action::StartPracticeTest if self.mode == Mode::Study => {
                Self::practice(bank, self.config, self.filter, rng)
            }

            Action::RetakePracticeTest if phase == Phase::PracticeSummary => {
                Self::practice(bank, self.config, self.filter, rng)
            }

            Action::ExitPracticeTest if self.mode == Mode::PracticeTest => {
                info!("practice test exited");
                Self::study(bank, self.config, self.filter, rng)
            }

            _ => self.ignored(),
        }
    }

    fn select(mut self, option: usize) -> Session {
        let Some(card) = self.deck.get(self.position) else {
            return self;
        };
        if option >= card.options.len() {
            debug!("option {} out of range for {}", option, card.id);
            return self;
        }
        if self.mode == Mode::PracticeTest && card.is_correct(option) {
            self.correct += 1;
        }
        self.selection = Some(option);
        self
    }

    fn advance<R: Rng + ?Sized>(mut self, bank: &QuestionBank, rng: &mut R) -> Session {
        if self.position + 1 < self.deck.len() {
            self.position += 1;
            self.selection = None;
            return self;
        }
        match self.mode {
            Mode::Study => {
                debug!("study deck exhausted, reshuffling");
                Self::study(bank, self.config, self.filter, rng)
            }
            Mode::PracticeTest => {
                self.summary_shown = true;
                info!("practice test finished: {}/{}", self.correct, self.deck.len());
                self
            }
        }
    }

    fn ignored(self) -> Session {
        debug!("action ignored in {}", self.phase());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(40, 50), 80);
    }

    #[test]
    fn summary_pass_boundary() {
        assert!(Summary::new(40, 50, 80).passed);
        assert!(!Summary::new(39, 50, 80).passed);
        // 79.5% rounds to 80 and passes.
        assert!(Summary::new(159, 200, 80).passed);
        assert!(!Summary::new(0, 0, 80).passed);
        assert_eq!(Summary::new(7, 10, 80).incorrect, 3);
    }
}
