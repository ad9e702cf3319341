//! holdem-showdown: heads-up Texas Hold'em hand evaluation
//!
//! Goals:
//! - Evaluate what each player can see at any street, pre-flop included
//! - Report the slots that make each hand, for highlighting
//! - Resolve the winner with category first, then tie-break ranks
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate and compare two hands
//! ```
//! use holdem_showdown::cards::parse_cards;
//! use holdem_showdown::evaluator::{compare, evaluate, HandCategory, Outcome};
//! use holdem_showdown::hand::{HoleCards, Street};
//!
//! let board = parse_cards("Kc Qd Jh 3s 2c").unwrap();
//! let first: HoleCards = "As Th".parse().unwrap();
//! let second: HoleCards = "Kd Ks".parse().unwrap();
//!
//! let a = evaluate(&first, &board, Street::River).unwrap();
//! let b = evaluate(&second, &board, Street::River).unwrap();
//! assert_eq!(a.category, HandCategory::Straight);
//! assert_eq!(b.category, HandCategory::ThreeOfAKind);
//! assert_eq!(compare(&a, &b), Outcome::FirstWins);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin holdem-showdown -- --deal "As Kd | Qh Qs | 2c 7d 9h Jc 3s"
//! ```

pub mod cards;
pub mod cli;
pub mod evaluator;
pub mod hand;
pub mod locale;
pub mod round;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
