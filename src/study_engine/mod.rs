//! Core study engine: question bank, deck building, and session flow.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: source records, deck cards, filters, modes |
//! | `config`   | `DeckConfig` tunables (option count, test size, pass mark, seed) |
//! | `error`    | `BankError` and `PreferenceError` |
//! | `bank`     | Loading and validating the question bank |
//! | `shuffle`  | Fisher-Yates shuffle over any `Rng`, seeded RNG factory |
//! | `options`  | Distractor selection for a single card |
//! | `builder`  | Deck construction, topic filtering, practice sampling |
//! | `session`  | Study / practice-test state machine and scoring |
//! | `view`     | What the user sees for a session, plus its JSON form |
//! | `theme`    | Light/dark preference with best-effort storage |

pub mod bank;
pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod options;
pub mod session;
pub mod shuffle;
pub mod theme;
pub mod view;

// Re-export the public API surface so callers can use
// `study_engine::build_deck` without reaching into sub-modules.
pub use bank::QuestionBank;
pub use builder::{build_deck, filter_sources, sample_practice};
pub use config::DeckConfig;
pub use error::{BankError, PreferenceError};
pub use models::{CategoryFilter, Deck, DeckCard, Mode, OptionSet, SourceRecord};
pub use options::build_options;
pub use session::{Action, Phase, Session, Summary};
pub use shuffle::{make_rng, shuffle};
pub use theme::{resolve_theme, toggle_theme, FileStore, MemoryStore, PreferenceStore, Theme};
pub use view::{render, to_view_json, CardView, Feedback, OptionState, OptionView, SessionView};
