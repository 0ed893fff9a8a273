//! Terminal rendering of quiz state.
//!
//! Everything here is read-only: callers mutate the session, then ask for
//! a fresh render.

use std::io::{self, Write};

use comfy_table::{Cell, ContentArrangement, Table};

use phishbuster_core::session::QuizSession;
use phishbuster_core::statistics::SessionStats;
use phishbuster_core::tips::TIPS;

pub fn render_metrics<R, W: Write>(out: &mut W, session: &QuizSession<R>) -> io::Result<()> {
    writeln!(
        out,
        "Score: {} | Rounds: {} | Accuracy: {:.1}%",
        session.score(),
        session.rounds(),
        session.accuracy()
    )
}

/// Metrics, the current message card, and the answer keys.
pub fn render_round<R, W: Write>(out: &mut W, session: &QuizSession<R>) -> io::Result<()> {
    let sample = session.current_sample();

    let mut card = Table::new();
    card.set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80)
        .add_row(vec![Cell::new("From"), Cell::new(&sample.sender)])
        .add_row(vec![Cell::new("Subject"), Cell::new(&sample.subject)])
        .add_row(vec![Cell::new(""), Cell::new(&sample.body)])
        .add_row(vec![Cell::new("Link shown"), Cell::new(&sample.link)]);

    writeln!(out)?;
    render_metrics(out, session)?;
    writeln!(out)?;
    writeln!(out, "Is this message Phishing or Safe?")?;
    writeln!(out, "{card}")?;
    writeln!(out, "[p] Phishing   [s] Safe   (h for help)")?;
    Ok(())
}

/// Feedback for an answered round.
pub fn render_feedback<R, W: Write>(out: &mut W, session: &QuizSession<R>) -> io::Result<()> {
    if !session.feedback().is_empty() {
        writeln!(out, "{}", session.feedback())?;
    }
    render_metrics(out, session)?;
    writeln!(out, "[n] Next message   [r] Reset score")
}

pub fn render_tips<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Tips:")?;
    for tip in TIPS {
        writeln!(out, "  - {tip}")?;
    }
    Ok(())
}

pub fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  p, phish        mark the message as Phishing")?;
    writeln!(out, "  s, safe         mark the message as Safe")?;
    writeln!(out, "  n, next         show another message (after answering)")?;
    writeln!(out, "  r, reset        reset score and rounds")?;
    writeln!(out, "  t, tips         show phishing-spotting tips")?;
    writeln!(out, "  q, quit, exit   end the session")
}

/// Final results table.
pub fn render_summary<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Score", "Rounds", "Misses", "Accuracy"]);
    table.add_row(vec![
        Cell::new(stats.score),
        Cell::new(stats.rounds),
        Cell::new(stats.misses),
        Cell::new(format!("{:.1}%", stats.accuracy)),
    ]);

    writeln!(out, "\nSession summary")?;
    writeln!(out, "{table}")
}
