use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of card positions a player can see: two hole cards plus the board.
pub const SLOT_COUNT: usize = 7;

/// First slot index that belongs to the community cards.
pub const FIRST_BOARD_SLOT: usize = 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("invalid reveal count {0}: expected 0, 3, 4 or 5")]
    InvalidRevealCount(usize),
    #[error("{revealed} board cards revealed but only {available} dealt")]
    NotEnoughBoardCards { revealed: usize, available: usize },
    #[error("board is already fully revealed")]
    FullyRevealed,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards (slots 0 and 1).
///
/// ```
/// use holdem_showdown::cards::{Card, Rank, Suit};
/// use holdem_showdown::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    /// Return the first (left) hole card.
    pub fn first(&self) -> Card {
        self.0
    }

    /// Return the second (right) hole card.
    pub fn second(&self) -> Card {
        self.1
    }

    /// Return both hole cards as a fixed array.
    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// How far the community cards have been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, clap::ValueEnum)]
#[non_exhaustive]
pub enum Street {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Number of community cards visible on this street (0, 3, 4 or 5).
    pub const fn reveal_count(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Number of slots a player can see on this street, hole cards included.
    pub const fn visible_slots(self) -> usize {
        FIRST_BOARD_SLOT + self.reveal_count()
    }

    pub fn from_reveal_count(n: usize) -> Result<Self, HandError> {
        match n {
            0 => Ok(Street::Preflop),
            3 => Ok(Street::Flop),
            4 => Ok(Street::Turn),
            5 => Ok(Street::River),
            other => Err(HandError::InvalidRevealCount(other)),
        }
    }

    pub const fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };
        f.write_str(s)
    }
}

/// Community cards plus how many of them are face up.
///
/// Cards past the reveal count are dealt but hidden; [`Board::visible`] never
/// exposes them.
///
/// ```
/// use holdem_showdown::hand::{Board, Street};
///
/// let mut board: Board = "2c 3c 4c 9d Kh".parse().unwrap();
/// assert_eq!(board.street(), Street::Preflop);
/// assert!(board.visible().is_empty());
/// board.reveal_next().unwrap();
/// assert_eq!(board.visible().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
    street: Street,
}

impl Board {
    /// A board with every dealt card still face down.
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        Self::with_street(cards, Street::Preflop)
    }

    pub fn with_street(cards: Vec<Card>, street: Street) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        if street.reveal_count() > cards.len() {
            return Err(HandError::NotEnoughBoardCards {
                revealed: street.reveal_count(),
                available: cards.len(),
            });
        }
        Ok(Self { cards, street })
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Dealt community cards, hidden ones included.
    pub fn dealt(&self) -> &[Card] {
        &self.cards
    }

    /// Face-up community cards, in board position order.
    pub fn visible(&self) -> &[Card] {
        &self.cards[..self.street.reveal_count()]
    }

    /// Turn over the next street's cards. Revealed cards are never replaced.
    pub fn reveal_next(&mut self) -> Result<Street, HandError> {
        let next = self.street.next().ok_or(HandError::FullyRevealed)?;
        if next.reveal_count() > self.cards.len() {
            return Err(HandError::NotEnoughBoardCards {
                revealed: next.reveal_count(),
                available: self.cards.len(),
            });
        }
        self.street = next;
        Ok(next)
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Validate that hole cards and community cards can come from one deck.
/// Checks board size and that no card appears twice.
///
/// ```
/// use holdem_showdown::cards::{Card, Rank, Suit};
/// use holdem_showdown::hand::{validate_holdem, HoleCards};
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// let board = [
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Clubs),
/// ];
/// validate_holdem(&hole, &board).unwrap();
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &[Card]) -> Result<(), HandError> {
    if board.len() > 5 {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let set: HashSet<Card> = board.iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    Ok(())
}
