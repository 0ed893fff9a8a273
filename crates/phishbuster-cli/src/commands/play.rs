//! The `phishbuster play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;

use phishbuster_core::model::Label;
use phishbuster_core::session::{AnswerOutcome, QuizSession};
use phishbuster_core::statistics::SessionStats;
use phishbuster_core::store::SampleStore;

use crate::config::load_config_from;
use crate::display;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Mark(Label),
    Next,
    Reset,
    Tips,
    Help,
    Quit,
}

impl Action {
    fn parse(input: &str) -> Option<Action> {
        match input.trim().to_lowercase().as_str() {
            "p" | "phish" | "phishing" => Some(Action::Mark(Label::Phish)),
            "s" | "safe" => Some(Action::Mark(Label::Safe)),
            "n" | "next" => Some(Action::Next),
            "r" | "reset" => Some(Action::Reset),
            "t" | "tips" => Some(Action::Tips),
            "h" | "help" | "?" => Some(Action::Help),
            "q" | "quit" | "exit" => Some(Action::Quit),
            _ => None,
        }
    }
}

pub fn execute(
    samples: Option<PathBuf>,
    seed: Option<u64>,
    no_tips: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let samples_path = samples.unwrap_or(config.samples);

    let store = SampleStore::new();
    let set = store
        .load(&samples_path)
        .with_context(|| format!("failed to load samples from {}", samples_path.display()))?;

    let mut session = match seed.or(config.seed) {
        Some(seed) => QuizSession::seeded(set, seed),
        None => QuizSession::new(set),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "PhishBuster: learn to spot phishing emails with quick, interactive rounds."
    )?;
    if config.show_tips && !no_tips {
        display::render_tips(&mut out)?;
    }

    let stats = run(&mut session, stdin.lock(), &mut out)?;
    tracing::info!(
        score = stats.score,
        rounds = stats.rounds,
        accuracy = stats.accuracy,
        "session finished"
    );
    Ok(())
}

/// Drive a session from line-oriented input until `quit` or end of input.
pub fn run<R: Rng, I: BufRead, W: Write>(
    session: &mut QuizSession<R>,
    input: I,
    out: &mut W,
) -> Result<SessionStats> {
    display::render_round(out, session)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(action) = Action::parse(&line) else {
            writeln!(out, "Unrecognized input '{}'. Type 'h' for help.", line.trim())?;
            continue;
        };

        match action {
            Action::Mark(choice) => match session.submit_answer(choice) {
                AnswerOutcome::Ignored => {
                    writeln!(out, "Already answered. Type 'n' for the next message.")?;
                }
                AnswerOutcome::Scored { .. } => display::render_feedback(out, session)?,
            },
            Action::Next => {
                if session.is_answered() {
                    session.new_round();
                    display::render_round(out, session)?;
                } else {
                    writeln!(out, "Answer this message before moving on.")?;
                }
            }
            Action::Reset => {
                session.reset();
                writeln!(out, "Score reset.")?;
                display::render_round(out, session)?;
            }
            Action::Tips => display::render_tips(out)?,
            Action::Help => display::render_help(out)?,
            Action::Quit => break,
        }
        out.flush()?;
    }

    let stats = session.stats();
    display::render_summary(out, &stats)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use phishbuster_core::model::Sample;
    use phishbuster_core::store::SampleSet;

    fn single(label: Label) -> QuizSession {
        let set = SampleSet::new(vec![Sample {
            sender: "Bank <alerts@bank-secure.example>".into(),
            subject: "Account locked".into(),
            body: "Verify now".into(),
            link: "http://bank-secure.example/login".into(),
            label,
            clue: "Urgent language".into(),
        }])
        .unwrap();
        QuizSession::seeded(Arc::new(set), 1)
    }

    fn play(session: &mut QuizSession, input: &str) -> (SessionStats, String) {
        let mut out = Vec::new();
        let stats = run(session, input.as_bytes(), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_actions() {
        assert_eq!(Action::parse(" P "), Some(Action::Mark(Label::Phish)));
        assert_eq!(Action::parse("phishing"), Some(Action::Mark(Label::Phish)));
        assert_eq!(Action::parse("Safe"), Some(Action::Mark(Label::Safe)));
        assert_eq!(Action::parse("n"), Some(Action::Next));
        assert_eq!(Action::parse("?"), Some(Action::Help));
        assert_eq!(Action::parse("EXIT"), Some(Action::Quit));
        assert_eq!(Action::parse("maybe"), None);
    }

    #[test]
    fn correct_answer_then_quit() {
        let mut session = single(Label::Phish);
        let (stats, out) = play(&mut session, "p\nq\n");
        assert_eq!(stats.score, 1);
        assert_eq!(stats.rounds, 1);
        assert!(out.contains("Is this message Phishing or Safe?"));
        assert!(out.contains("Correct! Urgent language"));
        assert!(out.contains("Accuracy: 100.0%"));
    }

    #[test]
    fn wrong_answer_names_label() {
        let mut session = single(Label::Phish);
        let (stats, out) = play(&mut session, "s\n");
        assert_eq!(stats.score, 0);
        assert_eq!(stats.rounds, 1);
        assert!(out.contains("Not quite. It was Phishing. Urgent language"));
    }

    #[test]
    fn double_answer_is_ignored() {
        let mut session = single(Label::Phish);
        let (stats, out) = play(&mut session, "p\ns\n");
        assert_eq!(stats.score, 1);
        assert_eq!(stats.rounds, 1);
        assert!(out.contains("Already answered"));
    }

    #[test]
    fn next_requires_an_answer() {
        let mut session = single(Label::Safe);
        let (stats, out) = play(&mut session, "n\ns\nn\np\n");
        assert!(out.contains("Answer this message before moving on."));
        assert_eq!(stats.rounds, 2);
        assert_eq!(stats.score, 1);
        assert!(out.contains("Accuracy: 50.0%"));
    }

    #[test]
    fn reset_zeroes_score() {
        let mut session = single(Label::Safe);
        let (stats, out) = play(&mut session, "s\nr\n");
        assert!(out.contains("Score reset."));
        assert_eq!(stats.rounds, 0);
        assert_eq!(stats.score, 0);
        assert!(!session.is_answered());
    }

    #[test]
    fn unknown_and_blank_input() {
        let mut session = single(Label::Safe);
        let (stats, out) = play(&mut session, "\nwhat\nh\nt\n");
        assert!(out.contains("Unrecognized input 'what'"));
        assert!(out.contains("Commands:"));
        assert!(out.contains("q, quit, exit"));
        assert!(out.contains("Tips:"));
        assert_eq!(stats.rounds, 0);
        assert!(out.contains("Session summary"));
    }

    #[test]
    fn exit_ends_the_session() {
        let mut session = single(Label::Safe);
        let (stats, out) = play(&mut session, "s\nexit\np\n");
        assert_eq!(stats.rounds, 1);
        assert_eq!(stats.score, 1);
        assert!(out.contains("Session summary"));
    }
}
