//! Command-line configuration and the plain (non-TUI) report.
use crate::evaluator::Seat;
use crate::hand::Street;
use crate::locale::Locale;
use crate::round::{sample_deals, Deal, Round, RoundError};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Heads-up Hold'em showdown viewer
#[derive(Parser, Debug, Clone)]
#[command(name = "holdem-showdown", version, about, long_about = None)]
pub struct Cli {
    /// Deal to show, as "<hole> | <hole> | <board>", e.g. "As Kd | Qh Qs | 2c 7d 9h Jc 3s".
    /// Repeat to queue several deals; the built-in samples are used when omitted.
    #[arg(short, long = "deal", value_name = "DEAL")]
    pub deals: Vec<Deal>,

    /// Print the evaluation instead of starting the TUI
    #[arg(long)]
    pub plain: bool,

    /// Street to evaluate at in plain mode
    #[arg(long, value_enum, default_value_t = Street::River)]
    pub street: Street,

    /// Language for hand labels and banners
    #[arg(long, value_enum, default_value_t = Locale::English)]
    pub locale: Locale,

    /// TUI redraw interval in milliseconds
    #[arg(long, default_value_t = 250)]
    pub tick_rate_ms: u64,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Deals given on the command line, or the built-in samples.
    pub fn deals(&self) -> Vec<Deal> {
        if self.deals.is_empty() {
            sample_deals()
        } else {
            self.deals.clone()
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Text summary of one deal revealed up to `street`.
pub fn plain_report(deal: Deal, street: Street, locale: Locale) -> Result<String, RoundError> {
    let mut round = Round::new(deal)?;
    while round.street() < street {
        round.reveal_next()?;
    }
    let board: Vec<String> = round.board().visible().iter().map(ToString::to_string).collect();
    let mut out = format!("Deal:   {deal}\nStreet: {}  Board: {}\n", round.street(), board.join(" "));
    let outcome = round.outcome();
    for seat in Seat::BOTH {
        let player = round.player(seat);
        let eval = &player.evaluation;
        out.push_str(&format!(
            "{}: {}  {}  slots {:?}  key [{}]",
            locale.player_name(seat),
            player.hole,
            eval.category.label(locale),
            eval.defining_slots(),
            eval.tie_break_key()
        ));
        if let Some(outcome) = outcome {
            out.push_str("  ");
            out.push_str(locale.banner(outcome, seat));
        }
        out.push('\n');
    }
    Ok(out)
}
