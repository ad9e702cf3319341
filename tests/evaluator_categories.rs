use holdem_showdown::cards::{Card, Rank::*, Suit::*};
use holdem_showdown::evaluator::{evaluate, HandCategory, HandEvaluation};
use holdem_showdown::hand::{HoleCards, Street};

fn river(hole: [Card; 2], board: [Card; 5]) -> HandEvaluation {
    let hole = HoleCards::try_new(hole[0], hole[1]).expect("valid hole cards");
    evaluate(&hole, &board, Street::River).expect("valid deal")
}

fn slots(e: &HandEvaluation) -> Vec<usize> {
    e.defining_slots().iter().collect()
}

#[test]
fn category_royal_flush() {
    let e = river(
        [Card::new(Ace, Spades), Card::new(King, Spades)],
        [
            Card::new(Queen, Spades),
            Card::new(Jack, Spades),
            Card::new(Ten, Spades),
            Card::new(Two, Hearts),
            Card::new(Three, Clubs),
        ],
    );
    assert_eq!(e.category, HandCategory::RoyalFlush);
    assert_eq!(slots(&e), vec![0, 1, 2, 3, 4]);
    assert_eq!(e.tie_break_key().as_slice(), &[Ace]);
}

#[test]
fn category_straight_flush() {
    let e = river(
        [Card::new(Nine, Hearts), Card::new(Two, Clubs)],
        [
            Card::new(Eight, Hearts),
            Card::new(Seven, Hearts),
            Card::new(Six, Hearts),
            Card::new(Five, Hearts),
            Card::new(King, Diamonds),
        ],
    );
    assert_eq!(e.category, HandCategory::StraightFlush);
    assert_eq!(slots(&e), vec![0, 2, 3, 4, 5]);
    assert_eq!(e.tie_break_key().as_slice(), &[Nine]);
}

#[test]
fn category_four_of_a_kind() {
    let e = river(
        [Card::new(Nine, Clubs), Card::new(Nine, Diamonds)],
        [
            Card::new(Nine, Hearts),
            Card::new(Nine, Spades),
            Card::new(Ace, Clubs),
            Card::new(King, Clubs),
            Card::new(Two, Hearts),
        ],
    );
    assert_eq!(e.category, HandCategory::FourOfAKind);
    assert_eq!(slots(&e), vec![0, 1, 2, 3]);
    assert_eq!(e.tie_break_key().as_slice(), &[Nine, Ace, King, Two]);
}

#[test]
fn category_full_house() {
    let e = river(
        [Card::new(Three, Clubs), Card::new(Jack, Spades)],
        [
            Card::new(Three, Diamonds),
            Card::new(Three, Hearts),
            Card::new(Jack, Clubs),
            Card::new(Ace, Diamonds),
            Card::new(Eight, Spades),
        ],
    );
    assert_eq!(e.category, HandCategory::FullHouse);
    assert_eq!(slots(&e), vec![0, 1, 2, 3, 4]);
    assert_eq!(e.tie_break_key().as_slice(), &[Three, Jack]);
}

#[test]
fn category_flush() {
    let e = river(
        [Card::new(King, Hearts), Card::new(Ten, Hearts)],
        [
            Card::new(Eight, Hearts),
            Card::new(Six, Hearts),
            Card::new(Three, Hearts),
            Card::new(Ace, Clubs),
            Card::new(Two, Hearts),
        ],
    );
    assert_eq!(e.category, HandCategory::Flush);
    // every heart is a defining slot, six of them here
    assert_eq!(slots(&e), vec![0, 1, 2, 3, 4, 6]);
    assert_eq!(e.tie_break_key().as_slice(), &[King]);
}

#[test]
fn category_straight() {
    let e = river(
        [Card::new(Ten, Clubs), Card::new(Nine, Diamonds)],
        [
            Card::new(Eight, Hearts),
            Card::new(Seven, Spades),
            Card::new(Six, Clubs),
            Card::new(Six, Diamonds),
            Card::new(Two, Hearts),
        ],
    );
    assert_eq!(e.category, HandCategory::Straight);
    assert_eq!(slots(&e), vec![0, 1, 2, 3, 4]);
    assert_eq!(e.tie_break_key().as_slice(), &[Ten]);
}

#[test]
fn category_three_of_a_kind() {
    let e = river(
        [Card::new(Queen, Clubs), Card::new(Queen, Diamonds)],
        [
            Card::new(Queen, Hearts),
            Card::new(Seven, Spades),
            Card::new(Four, Clubs),
            Card::new(Nine, Diamonds),
            Card::new(Two, Hearts),
        ],
    );
    assert_eq!(e.category, HandCategory::ThreeOfAKind);
    assert_eq!(slots(&e), vec![0, 1, 2]);
    assert_eq!(e.tie_break_key().as_slice(), &[Queen, Nine, Seven, Four, Two]);
}

#[test]
fn category_two_pair() {
    let e = river(
        [Card::new(Jack, Clubs), Card::new(Four, Diamonds)],
        [
            Card::new(Jack, Hearts),
            Card::new(Four, Spades),
            Card::new(Ace, Clubs),
            Card::new(Nine, Diamonds),
            Card::new(Two, Hearts),
        ],
    );
    assert_eq!(e.category, HandCategory::TwoPair);
    assert_eq!(slots(&e), vec![0, 1, 2, 3]);
    assert_eq!(e.tie_break_key().as_slice(), &[Jack, Four, Ace, Nine, Two]);
}

#[test]
fn category_one_pair() {
    let e = river(
        [Card::new(Eight, Clubs), Card::new(Ace, Diamonds)],
        [
            Card::new(Eight, Hearts),
            Card::new(King, Spades),
            Card::new(Four, Clubs),
            Card::new(Nine, Diamonds),
            Card::new(Two, Hearts),
        ],
    );
    assert_eq!(e.category, HandCategory::OnePair);
    assert_eq!(slots(&e), vec![0, 2]);
    assert_eq!(e.tie_break_key().as_slice(), &[Eight, Ace, King, Nine, Four]);
}

#[test]
fn category_high_card() {
    let e = river(
        [Card::new(Ace, Clubs), Card::new(Jack, Diamonds)],
        [
            Card::new(Eight, Hearts),
            Card::new(Six, Spades),
            Card::new(Four, Clubs),
            Card::new(Three, Diamonds),
            Card::new(Two, Hearts),
        ],
    );
    assert_eq!(e.category, HandCategory::HighCard);
    assert!(e.defining_slots().is_empty());
    assert_eq!(e.tie_break_key().as_slice(), &[Ace, Ace, Jack, Eight, Six]);
}

#[test]
fn categories_are_ordered() {
    assert!(HandCategory::ALL.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(HandCategory::ALL[0], HandCategory::HighCard);
    assert_eq!(HandCategory::ALL[9], HandCategory::RoyalFlush);
}
