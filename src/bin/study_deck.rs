//! Terminal front end for `study_deck`.
//!
//! Reads one command per line from stdin:
//!
//! | Input            | Action |
//! |------------------|--------|
//! | `1`..`4`         | pick an answer option |
//! | `n` / Enter      | next card |
//! | `s`              | shuffle / restart the study deck |
//! | `t`              | start a practice test |
//! | `r`              | retake the practice test (summary screen) |
//! | `x`              | exit the practice test |
//! | `topic <name>`   | filter by topic (`topic all` clears it) |
//! | `topics`         | list topics |
//! | `theme`          | toggle light/dark |
//! | `q`              | quit |

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;

use study_deck::{
    make_rng, render, resolve_theme, to_view_json, toggle_theme, Action, CardView,
    CategoryFilter, DeckConfig, FileStore, MemoryStore, OptionState, PreferenceStore,
    QuestionBank, Session, SessionView, Summary, Theme,
};

#[derive(Parser)]
#[command(name = "study_deck", about = "Multiple-choice flashcards with practice tests", version)]
struct Cli {
    /// Question bank JSON file (defaults to the built-in road-rules bank)
    #[arg(long)]
    bank: Option<PathBuf>,

    /// Seed for reproducible decks
    #[arg(long)]
    seed: Option<u64>,

    /// Number of questions in a practice test
    #[arg(long)]
    practice_size: Option<usize>,

    /// Start filtered to this topic
    #[arg(long)]
    topic: Option<String>,

    /// Print each screen as JSON instead of text
    #[arg(long)]
    json: bool,
}

enum Command {
    Act(Action),
    ListTopics,
    ToggleTheme,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str, bank: &QuestionBank) -> Command {
    let line = line.trim();
    if let Some(name) = line.strip_prefix("topic ") {
        let name = name.trim();
        if name.eq_ignore_ascii_case("all") {
            return Command::Act(Action::SelectFilter(CategoryFilter::All));
        }
        // Unknown topics still filter, which shows the empty-deck screen.
        let category = bank.find_category(name).unwrap_or_else(|| name.to_string());
        return Command::Act(Action::SelectFilter(CategoryFilter::Only(category)));
    }
    if let Ok(n) = line.parse::<usize>() {
        return match n.checked_sub(1) {
            Some(index) => Command::Act(Action::SelectOption(index)),
            None => Command::Unknown(line.to_string()),
        };
    }
    match line {
        "" | "n" | "next" => Command::Act(Action::Next),
        "s" | "shuffle"   => Command::Act(Action::Shuffle),
        "t" | "test"      => Command::Act(Action::StartPracticeTest),
        "r" | "retake"    => Command::Act(Action::RetakePracticeTest),
        "x" | "exit"      => Command::Act(Action::ExitPracticeTest),
        "topics"          => Command::ListTopics,
        "theme"           => Command::ToggleTheme,
        "q" | "quit"      => Command::Quit,
        other             => Command::Unknown(other.to_string()),
    }
}

/// `COLORFGBG` is "fg;bg"; a low background index means a dark terminal.
fn system_prefers_dark() -> Option<bool> {
    let value = std::env::var("COLORFGBG").ok()?;
    let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
    Some(bg < 7 || bg == 8)
}

struct Palette {
    correct: &'static str,
    incorrect: &'static str,
    muted: &'static str,
    accent: &'static str,
}

const RESET: &str = "\x1b[0m";

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            correct: "\x1b[32m",
            incorrect: "\x1b[31m",
            muted: "\x1b[90m",
            accent: "\x1b[34m",
        },
        Theme::Dark => Palette {
            correct: "\x1b[92m",
            incorrect: "\x1b[91m",
            muted: "\x1b[37m",
            accent: "\x1b[96m",
        },
    }
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) / 5) as usize;
    format!("[{}{}] {percent}%", "#".repeat(filled), "-".repeat(20 - filled))
}

fn print_card(out: &mut impl Write, card: &CardView, p: &Palette) -> io::Result<()> {
    writeln!(out, "{}{} · {}{}", p.accent, card.mode, card.category, RESET)?;
    writeln!(out, "Card {}/{}  {}", card.position + 1, card.total, progress_bar(card.progress_percent))?;
    writeln!(out)?;
    writeln!(out, "Q: {}", card.prompt)?;
    if let Some(image) = &card.image {
        writeln!(out, "   (image: {image})")?;
    }
    for (i, option) in card.options.iter().enumerate() {
        let (color, mark) = match option.state {
            OptionState::Unselected        => ("", " "),
            OptionState::Correct           => (p.correct, "✓"),
            OptionState::IncorrectSelected => (p.incorrect, "✗"),
            OptionState::Muted             => (p.muted, " "),
        };
        writeln!(out, "  {color}[{}] {mark} {}{RESET}", i + 1, option.text)?;
    }
    if let Some(feedback) = &card.feedback {
        writeln!(out)?;
        let verdict = if feedback.correct {
            format!("{}Correct!{RESET}", p.correct)
        } else {
            format!("{}Incorrect.{RESET}", p.incorrect)
        };
        writeln!(out, "{verdict} The answer is: {}", feedback.answer)?;
        if !feedback.reference.is_empty() {
            writeln!(out, "{}Reference: {}{RESET}", p.muted, feedback.reference)?;
        }
        writeln!(out, "(n) next")?;
    }
    Ok(())
}

fn print_summary(out: &mut impl Write, summary: &Summary, p: &Palette) -> io::Result<()> {
    let verdict = if summary.passed {
        format!("{}PASSED{RESET}", p.correct)
    } else {
        format!("{}NOT PASSED{RESET}", p.incorrect)
    };
    writeln!(out, "Practice test complete: {verdict}")?;
    writeln!(out, "  Score:     {}%", summary.percent)?;
    writeln!(out, "  Correct:   {}", summary.correct)?;
    writeln!(out, "  Incorrect: {}", summary.incorrect)?;
    writeln!(out, "  Total:     {}", summary.total)?;
    writeln!(out, "(r) retake   (x) back to study")
}

fn print_screen(out: &mut impl Write, session: &Session, theme: Theme, as_json: bool) -> io::Result<()> {
    if as_json {
        return writeln!(out, "{}", to_view_json(session));
    }
    let p = palette(theme);
    writeln!(out)?;
    match render(session) {
        SessionView::Empty => {
            writeln!(out, "No cards available for {}.", session.filter())?;
            writeln!(out, "Try `topics` and `topic <name>`, or `topic all`.")?;
        }
        SessionView::Card(card) => print_card(out, &card, &p)?,
        SessionView::Summary(summary) => print_summary(out, &summary, &p)?,
    }
    write!(out, "> ")?;
    out.flush()
}

fn open_preferences() -> Box<dyn PreferenceStore> {
    match FileStore::default_location() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("theme preference will not be saved: {e}");
            Box::new(MemoryStore::default())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let bank = match &cli.bank {
        Some(path) => QuestionBank::load(path)?,
        None => QuestionBank::builtin()?,
    };
    info!("{} questions across {} topics", bank.len(), bank.categories().len());

    let mut config = DeckConfig::new();
    if let Some(size) = cli.practice_size {
        config = config.with_practice_size(size);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut rng: StdRng = make_rng(config.rng_seed);

    let mut preferences = open_preferences();
    let mut theme = resolve_theme(preferences.as_ref(), system_prefers_dark());

    let filter = match &cli.topic {
        Some(name) => CategoryFilter::Only(bank.find_category(name).unwrap_or_else(|| name.clone())),
        None => CategoryFilter::All,
    };
    let mut session = Session::study(&bank, config, filter, &mut rng);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_screen(&mut out, &session, theme, cli.json)?;

    for line in stdin.lock().lines() {
        match parse_command(&line?, &bank) {
            Command::Act(action) => session = session.apply(action, &bank, &mut rng),
            Command::ListTopics => {
                writeln!(out, "Topics: {}", bank.categories().join(", "))?;
            }
            Command::ToggleTheme => {
                theme = toggle_theme(preferences.as_mut(), theme);
                writeln!(out, "Theme: {theme}")?;
            }
            Command::Quit => break,
            Command::Unknown(input) => writeln!(out, "Unknown command: {input}")?,
        }
        print_screen(&mut out, &session, theme, cli.json)?;
    }
    writeln!(out)?;
    Ok(())
}
