use crate::cards::{parse_cards, Card, CardParseError};
use crate::evaluator::{compare, evaluate_on_board, EvalError, HandEvaluation, Outcome, Seat};
use crate::hand::{Board, HandError, HoleCards, Street};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Community cards dealt per round.
pub const BOARD_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("expected '<hole> | <hole> | <board>', got {0} section(s)")]
    Sections(usize),
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error("expected 5 board cards, got {0}")]
    BoardSize(usize),
    #[error("card {0} is dealt more than once")]
    Duplicate(Card),
    #[error(transparent)]
    Hand(#[from] HandError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error(transparent)]
    Board(#[from] HandError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("no deals to play")]
    NoDeals,
}

/// Both players' hole cards and the full board, before anything is revealed.
///
/// All nine cards are distinct.
///
/// ```
/// use holdem_showdown::round::Deal;
///
/// let deal: Deal = "As Kd | Qh Qs | 2c 7d 9h Jc 3s".parse().unwrap();
/// assert_eq!(deal.to_string(), "As Kd | Qh Qs | 2c 7d 9h Jc 3s");
/// assert!("As Kd | As Qs | 2c 7d 9h Jc 3s".parse::<Deal>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deal {
    holes: [HoleCards; 2],
    board: [Card; BOARD_SIZE],
}

impl Deal {
    pub fn try_new(first: HoleCards, second: HoleCards, board: [Card; BOARD_SIZE]) -> Result<Self, DealError> {
        let mut seen = HashSet::with_capacity(9);
        let all = first.as_array().into_iter().chain(second.as_array()).chain(board);
        for card in all {
            if !seen.insert(card) {
                return Err(DealError::Duplicate(card));
            }
        }
        Ok(Self { holes: [first, second], board })
    }

    pub fn hole(&self, seat: Seat) -> &HoleCards {
        &self.holes[seat.index()]
    }

    pub fn board(&self) -> &[Card; BOARD_SIZE] {
        &self.board
    }
}

impl FromStr for Deal {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sections: Vec<&str> = s.split('|').map(str::trim).collect();
        let [first, second, board] = sections[..] else {
            return Err(DealError::Sections(sections.len()));
        };
        let first = HoleCards::from_slice(&parse_cards(first)?)?;
        let second = HoleCards::from_slice(&parse_cards(second)?)?;
        let board_cards = parse_cards(board)?;
        let board: [Card; BOARD_SIZE] =
            board_cards.as_slice().try_into().map_err(|_| DealError::BoardSize(board_cards.len()))?;
        Deal::try_new(first, second, board)
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} |", self.holes[0], self.holes[1])?;
        for card in &self.board {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// One seat at the table: its hole cards and the evaluation of what it can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub hole: HoleCards,
    pub evaluation: HandEvaluation,
}

/// A deal being revealed street by street.
#[derive(Debug, Clone)]
pub struct Round {
    deal: Deal,
    board: Board,
    players: [Player; 2],
}

impl Round {
    /// Start a round pre-flop, with both hands evaluated on the hole cards alone.
    pub fn new(deal: Deal) -> Result<Self, RoundError> {
        let board = Board::try_new(deal.board.to_vec())?;
        let seat = |s: Seat| -> Result<Player, RoundError> {
            let hole = *deal.hole(s);
            Ok(Player { hole, evaluation: evaluate_on_board(&hole, &board)? })
        };
        let players = [seat(Seat::First)?, seat(Seat::Second)?];
        info!(%deal, "new deal");
        Ok(Self { deal, board, players })
    }

    /// Turn over the next street and re-evaluate both players.
    ///
    /// Fails once the river is showing; the round is then waiting for a new deal.
    pub fn reveal_next(&mut self) -> Result<Street, RoundError> {
        let street = self.board.reveal_next()?;
        for player in &mut self.players {
            player.evaluation = evaluate_on_board(&player.hole, &self.board)?;
        }
        info!(%street, board = ?self.board.visible(), "revealed");
        if let Some(outcome) = self.outcome() {
            info!(
                ?outcome,
                first = %self.players[0].evaluation.category,
                second = %self.players[1].evaluation.category,
                "showdown"
            );
        }
        Ok(street)
    }

    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn street(&self) -> Street {
        self.board.street()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Winner of the hand, known only once the river is revealed.
    pub fn outcome(&self) -> Option<Outcome> {
        (self.street() == Street::River)
            .then(|| compare(&self.players[0].evaluation, &self.players[1].evaluation))
    }
}

const SAMPLE_DEALS: [&str; 6] = [
    "As Kd | Qh Qs | 2c 7d 9h Jc 3s",
    "Ah Kh | 9c 9d | Qh Jh 9s Th 2c",
    "Ac 2d | 6s 7h | 3c 4h 5s Kd 9c",
    "Kc 3c | Kd 5d | Kh 3h 5s 9c 2s",
    "Ac 2d | As 2h | Kh Kd Qs Qc Jh",
    "9s 9h | 4d 4c | 9d 4h 4s Ac Kc",
];

/// Fixed deals used when none are given on the command line.
pub fn sample_deals() -> Vec<Deal> {
    SAMPLE_DEALS.iter().filter_map(|s| s.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::HandCategory;

    #[test]
    fn parse_rejects_bad_layouts() {
        assert_eq!("As Kd | Qh Qs".parse::<Deal>(), Err(DealError::Sections(2)));
        assert_eq!("As Kd | Qh Qs | 2c 7d 9h".parse::<Deal>(), Err(DealError::BoardSize(3)));
        assert!(matches!("As | Qh Qs | 2c 7d 9h Jc 3s".parse::<Deal>(), Err(DealError::Hand(_))));
        assert!(matches!("Zz Kd | Qh Qs | 2c 7d 9h Jc 3s".parse::<Deal>(), Err(DealError::Card(_))));
        let dup = "As Kd | Qh Qs | 2c 7d 9h Jc Kd".parse::<Deal>();
        assert_eq!(dup, Err(DealError::Duplicate("Kd".parse().unwrap())));
    }

    #[test]
    fn round_starts_preflop() {
        let round = Round::new("As Kd | Qh Qs | 2c 7d 9h Jc 3s".parse().unwrap()).unwrap();
        assert_eq!(round.street(), Street::Preflop);
        assert!(round.board().visible().is_empty());
        assert_eq!(round.player(Seat::First).evaluation.category, HandCategory::HighCard);
        assert_eq!(round.player(Seat::Second).evaluation.category, HandCategory::OnePair);
        assert_eq!(round.outcome(), None);
    }

    #[test]
    fn reveal_reevaluates_until_river() {
        let mut round = Round::new("Ah Kh | 9c 9d | Qh Jh 9s Th 2c".parse().unwrap()).unwrap();
        assert_eq!(round.reveal_next().unwrap(), Street::Flop);
        assert_eq!(round.player(Seat::Second).evaluation.category, HandCategory::ThreeOfAKind);
        assert_eq!(round.outcome(), None);
        assert_eq!(round.reveal_next().unwrap(), Street::Turn);
        assert_eq!(round.player(Seat::First).evaluation.category, HandCategory::RoyalFlush);
        assert_eq!(round.reveal_next().unwrap(), Street::River);
        assert_eq!(round.outcome(), Some(Outcome::FirstWins));
        assert!(matches!(round.reveal_next(), Err(RoundError::Board(HandError::FullyRevealed))));
    }

    #[test]
    fn sample_deals_all_parse() {
        assert_eq!(sample_deals().len(), SAMPLE_DEALS.len());
    }
}
