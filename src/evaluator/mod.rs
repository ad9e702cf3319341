pub(crate) mod detector;
pub(crate) mod grouping;
pub mod slots;
pub(crate) mod straight;
pub mod tiebreak;

use crate::cards::{Card, Rank};
use crate::hand::{validate_holdem, Board, HandError, HoleCards, Street, FIRST_BOARD_SLOT, SLOT_COUNT};
use crate::locale::Locale;
use core::cmp::Ordering;
use detector::{Match, LADDER, PREFLOP_RUNGS};
use grouping::SlotGrouping;
use std::fmt;
use tracing::{debug, trace};

pub use slots::SlotSet;
pub use tiebreak::TieBreakKey;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether unused cards break ties for this category. Straights, flushes
    /// and full houses are decided by their own ranks alone.
    pub const fn takes_kickers(self) -> bool {
        matches!(
            self,
            HandCategory::HighCard
                | HandCategory::OnePair
                | HandCategory::TwoPair
                | HandCategory::ThreeOfAKind
                | HandCategory::FourOfAKind
        )
    }

    pub fn label(self, locale: Locale) -> &'static str {
        locale.category(self)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::English))
    }
}

/// Result of evaluating one player's visible cards.
///
/// A fresh value is produced whenever the visible cards change; it is never
/// patched in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct HandEvaluation {
    pub category: HandCategory,
    defining_slots: SlotSet,
    key: TieBreakKey,
}

impl HandEvaluation {
    /// Slots (0,1 hole; 2..=6 board) that make up the category, for highlighting.
    pub const fn defining_slots(&self) -> SlotSet {
        self.defining_slots
    }

    pub const fn tie_break_key(&self) -> &TieBreakKey {
        &self.key
    }

    /// Category first, then the tie-break key.
    pub fn cmp_strength(&self, other: &HandEvaluation) -> Ordering {
        self.category.cmp(&other.category).then_with(|| self.key.compare(&other.key))
    }
}

/// Seat of one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Showdown result between two evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Outcome {
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Outcome::FirstWins => Some(Seat::First),
            Outcome::SecondWins => Some(Seat::Second),
            Outcome::Tie => None,
        }
    }

    /// The same result seen with the seats swapped.
    pub const fn reversed(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::FirstWins,
            Ordering::Less => Outcome::SecondWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("{revealed} board cards revealed but only {available} supplied")]
    NotEnoughCards { revealed: usize, available: usize },
}

/// Evaluate a player's hand from hole cards and the revealed part of the board.
///
/// `board` lists the community cards in position order; only the first
/// `street.reveal_count()` are read. Duplicate cards among the visible ones are
/// rejected.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::evaluator::{evaluate, HandCategory};
/// use holdem_showdown::hand::{HoleCards, Street};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board = parse_cards("Qc Jd 9h 3s 2c").unwrap();
/// let eval = evaluate(&hole, &board, Street::River).unwrap();
/// assert_eq!(eval.category, HandCategory::OnePair);
/// assert_eq!(eval.defining_slots().iter().collect::<Vec<_>>(), vec![0, 1]);
/// ```
pub fn evaluate(hole: &HoleCards, board: &[Card], street: Street) -> Result<HandEvaluation, EvalError> {
    let revealed = street.reveal_count();
    if board.len() < revealed {
        return Err(EvalError::NotEnoughCards { revealed, available: board.len() });
    }
    let visible_board = &board[..revealed];
    validate_holdem(hole, visible_board)?;

    let mut slots = [hole.first(); SLOT_COUNT];
    slots[1] = hole.second();
    slots[FIRST_BOARD_SLOT..FIRST_BOARD_SLOT + revealed].copy_from_slice(visible_board);
    Ok(evaluate_slots(&slots[..street.visible_slots()], street))
}

/// Evaluate against a [`Board`], using its current street.
pub fn evaluate_on_board(hole: &HoleCards, board: &Board) -> Result<HandEvaluation, EvalError> {
    evaluate(hole, board.visible(), board.street())
}

/// Compare two evaluations: category first, then tie-break keys.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::evaluator::{compare, evaluate, Outcome};
/// use holdem_showdown::hand::{HoleCards, Street};
///
/// let board = parse_cards("Kc 9d 4s 3h 2c").unwrap();
/// let a: HoleCards = "Ks Ad".parse().unwrap();
/// let b: HoleCards = "Kh Qd".parse().unwrap();
/// let ea = evaluate(&a, &board, Street::River).unwrap();
/// let eb = evaluate(&b, &board, Street::River).unwrap();
/// assert_eq!(compare(&ea, &eb), Outcome::FirstWins);
/// ```
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Outcome {
    Outcome::from(a.cmp_strength(b))
}

/// Run the detector ladder over the visible slots and build the key.
fn evaluate_slots(cards: &[Card], street: Street) -> HandEvaluation {
    let grouping = SlotGrouping::new(cards);
    let ladder: &[(HandCategory, &dyn detector::CategoryDetector)] = &LADDER;
    let rungs = if street == Street::Preflop { &ladder[..PREFLOP_RUNGS] } else { ladder };

    let best = rungs.iter().fold(None, |best, &(category, detector)| match detector.detect(&grouping) {
        Some(hit) => {
            trace!(?category, slots = ?hit.slots, ranks = ?hit.ranks, "detector matched");
            Some((category, hit))
        }
        None => best,
    });

    let evaluation = match best {
        Some((category, hit)) => from_match(category, hit, &grouping, street),
        None => high_card(hole_rank(cards), &grouping, street),
    };
    debug!(
        %street,
        category = ?evaluation.category,
        slots = ?evaluation.defining_slots,
        key = %evaluation.key,
        "evaluated hand"
    );
    evaluation
}

fn from_match(
    category: HandCategory,
    hit: Match,
    grouping: &SlotGrouping<'_>,
    street: Street,
) -> HandEvaluation {
    let mut key = hit.ranks;
    if category.takes_kickers() && street != Street::Preflop {
        tiebreak::append_kickers(&mut key, grouping, hit.slots);
    }
    HandEvaluation { category, defining_slots: hit.slots, key }
}

/// Stronger of the two hole cards (slots 0 and 1).
fn hole_rank(cards: &[Card]) -> Rank {
    cards[0].rank().max(cards[1].rank())
}

/// Nothing matched: the stronger hole card leads the key, then every visible
/// slot feeds the kickers since none is defining.
fn high_card(lead: Rank, grouping: &SlotGrouping<'_>, street: Street) -> HandEvaluation {
    let mut key = TieBreakKey::new();
    key.push(lead);
    if street != Street::Preflop {
        tiebreak::append_kickers(&mut key, grouping, SlotSet::EMPTY);
    }
    HandEvaluation { category: HandCategory::HighCard, defining_slots: SlotSet::EMPTY, key }
}
