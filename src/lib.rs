//! # study_deck
//!
//! A multiple-choice flashcard engine for drilling a fixed question bank.
//!
//! Every question in the bank has a prompt, one correct answer, optional
//! curated wrong answers, a reference citation and a topic. The engine turns
//! those records into shuffled four-option cards and runs a study session
//! over them.
//!
//! ## How it works
//!
//! 1. Load a [`QuestionBank`] from JSON (or use [`QuestionBank::builtin`]).
//! 2. Start a [`Session`]. It builds a deck for the active topic filter:
//!    every card gets three distractors picked from its curated list, then
//!    from same-topic answers, then from the whole bank.
//! 3. Feed user [`Action`]s to [`Session::apply`]. Each call returns the next
//!    session value; [`render`] describes what should be on screen.
//!
//! ## Modes
//!
//! - **Study**: unscored. Running off the end of the deck reshuffles it.
//! - **Practice test**: a random sample of up to 50 questions from the
//!   whole bank, scored at the end against an 80% pass mark.
//!
//! ## Quick start
//!
//! ```rust
//! use study_deck::{make_rng, render, Action, DeckConfig, QuestionBank, Session, SessionView};
//!
//! let bank = QuestionBank::builtin().expect("sample bank is valid");
//! // Seeded for reproducible decks; pass `None` for entropy.
//! let mut rng = make_rng(Some(42));
//! let session = Session::new(&bank, DeckConfig::new(), &mut rng);
//!
//! if let SessionView::Card(card) = render(&session) {
//!     println!("Q: {}", card.prompt);
//!     for (i, option) in card.options.iter().enumerate() {
//!         println!("  {}. {}", i + 1, option.text);
//!     }
//! }
//!
//! let session = session.apply(Action::SelectOption(0), &bank, &mut rng);
//! if let SessionView::Card(card) = render(&session) {
//!     let feedback = card.feedback.expect("answered");
//!     println!("Answer: {} ({})", feedback.answer, feedback.reference);
//! }
//! ```

pub mod study_engine;

// Convenience re-exports so callers can use `study_deck::build_deck`
// directly without reaching into `study_engine::`.
pub use study_engine::{
    build_deck, build_options, filter_sources, make_rng, render, resolve_theme,
    sample_practice, shuffle, to_view_json, toggle_theme, Action, BankError, CardView,
    CategoryFilter, Deck, DeckCard, DeckConfig, Feedback, FileStore, MemoryStore, Mode,
    OptionSet, OptionState, OptionView, Phase, PreferenceError, PreferenceStore, QuestionBank,
    Session, SessionView, SourceRecord, Summary, Theme,
};
