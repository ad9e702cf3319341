use crate::evaluator::{Outcome, Seat};
use crate::hand::Street;
use crate::locale::Locale;
use crate::round::{sample_deals, Deal, Player, Round, RoundError};
use std::time::{Duration, Instant};
use tracing::warn;

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    /// Reveal the next street; after the river, move on to the next deal.
    Advance,
    NextDeal,
    ToggleHelp,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub locale: Locale,
    round: Round,
    deals: Vec<Deal>,
    deal_index: usize,
    help_open: bool,
    error: Option<String>,
    error_at: Option<Instant>,
}

impl AppState {
    const ERROR_TTL: Duration = Duration::from_secs(3);

    /// Start on the first of `deals`, pre-flop.
    pub fn new(deals: Vec<Deal>, locale: Locale) -> Result<Self, RoundError> {
        let first = *deals.first().ok_or(RoundError::NoDeals)?;
        Ok(Self {
            locale,
            round: Round::new(first)?,
            deals,
            deal_index: 0,
            help_open: false,
            error: None,
            error_at: None,
        })
    }

    pub fn with_samples(locale: Locale) -> Result<Self, RoundError> {
        Self::new(sample_deals(), locale)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn street(&self) -> Street {
        self.round.street()
    }

    pub fn player(&self, seat: Seat) -> &Player {
        self.round.player(seat)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.round.outcome()
    }

    /// 1-based position of the current deal and the number of deals.
    pub fn deal_position(&self) -> (usize, usize) {
        (self.deal_index + 1, self.deals.len())
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    /// Expire stale error messages.
    pub fn on_tick(&mut self) {
        if self.error_at.is_some_and(|at| at.elapsed() >= Self::ERROR_TTL) {
            self.clear_error();
        }
    }

    fn set_error(&mut self, err: RoundError) {
        warn!(%err, "round update failed");
        self.error = Some(err.to_string());
        self.error_at = Some(Instant::now());
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.error_at = None;
    }

    fn advance(&mut self) -> Result<(), RoundError> {
        if self.round.street() == Street::River {
            return self.next_deal();
        }
        self.round.reveal_next().map(|_| ())
    }

    fn next_deal(&mut self) -> Result<(), RoundError> {
        let index = (self.deal_index + 1) % self.deals.len();
        let deal = *self.deals.get(index).ok_or(RoundError::NoDeals)?;
        self.round = Round::new(deal)?;
        self.deal_index = index;
        Ok(())
    }

    /// Apply an input action. Returns true when the table changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        let result = match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                return false;
            }
            InputAction::Advance => self.advance(),
            InputAction::NextDeal => self.next_deal(),
        };
        match result {
            Ok(()) => {
                self.clear_error();
                true
            }
            Err(err) => {
                self.set_error(err);
                false
            }
        }
    }
}
