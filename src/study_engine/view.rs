use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::study_engine::{
    models::{DeckCard, Mode},
    session::{percent_of, Phase, Session, Summary},
};

/// How an option button should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionState {
    Unselected,
    Correct,
    IncorrectSelected,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub text: String,
    pub state: OptionState,
}

/// Shown once an option has been picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: bool,
    pub answer: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub mode: Mode,
    pub prompt: String,
    pub image: Option<String>,
    pub category: String,
    pub position: usize,
    pub total: usize,
    pub progress_percent: u32,
    pub options: Vec<OptionView>,
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionView {
    /// No cards match the active filter.
    Empty,
    Card(CardView),
    Summary(Summary),
}

fn option_state(card: &DeckCard, index: usize, selection: Option<usize>) -> OptionState {
    match selection {
        None => OptionState::Unselected,
        Some(_) if index == card.answer_index => OptionState::Correct,
        Some(picked) if picked == index => OptionState::IncorrectSelected,
        Some(_) => OptionState::Muted,
    }
}

fn card_view(session: &Session, card: &DeckCard) -> CardView {
    let selection = session.selection();
    let total = session.deck().len();
    let answered = session.position() + usize::from(selection.is_some());

    CardView {
        mode: session.mode(),
        prompt: card.prompt.clone(),
        image: card.image.clone(),
        category: card.category.clone(),
        position: session.position(),
        total,
        progress_percent: percent_of(answered, total),
        options: card
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| OptionView {
                text: text.clone(),
                state: option_state(card, i, selection),
            })
            .collect(),
        feedback: selection.map(|picked| Feedback {
            correct: card.is_correct(picked),
            answer: card.answer.clone(),
            reference: card.reference.clone(),
        }),
    }
}

/// What the user should currently see.
pub fn render(session: &Session) -> SessionView {
    if let Some(summary) = session.summary() {
        return SessionView::Summary(summary);
    }
    match session.current_card() {
        Some(card) => SessionView::Card(card_view(session, card)),
        None       => SessionView::Empty,
    }
}

fn state_str(state: OptionState) -> &'static str {
    match state {
        OptionState::Unselected        => "unselected",
        OptionState::Correct           => "correct",
        OptionState::IncorrectSelected => "incorrect",
        OptionState::Muted             => "muted",
    }
}

/// JSON document describing the current screen, for UI clients.
///
/// Correctness of options is only exposed after a selection is made.
pub fn to_view_json(session: &Session) -> Value {
    let phase = session.phase();
    let body = match render(session) {
        SessionView::Empty => json!({
            "kind": "empty",
            "message": "No cards available for this topic",
        }),
        SessionView::Summary(s) => json!({
            "kind": "summary",
            "correct": s.correct,
            "incorrect": s.incorrect,
            "total": s.total,
            "percent": s.percent,
            "passed": s.passed,
        }),
        SessionView::Card(card) => {
            let options: Vec<Value> = card
                .options
                .iter()
                .enumerate()
                .map(|(i, o)| json!({ "index": i, "text": o.text, "state": state_str(o.state) }))
                .collect();
            let feedback = card.feedback.map(|f| json!({
                "correct": f.correct,
                "answer": f.answer,
                "reference": f.reference,
            }));
            json!({
                "kind": "card",
                "prompt": card.prompt,
                "image": card.image,
                "category": card.category,
                "position": card.position + 1,
                "total": card.total,
                "progress_percent": card.progress_percent,
                "options": options,
                "feedback": feedback,
            })
        }
    };

    let score = match session.mode() {
        Mode::PracticeTest => json!(session.correct()),
        Mode::Study        => Value::Null,
    };

    json!({
        "mode": session.mode().to_string(),
        "phase": phase.to_string(),
        "filter": session.filter().to_string(),
        "score": score,
        "view": body,
    })
}
