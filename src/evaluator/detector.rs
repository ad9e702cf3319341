use super::grouping::SlotGrouping;
use super::slots::SlotSet;
use super::straight::{find_straight, StraightRun};
use super::tiebreak::TieBreakKey;
use super::HandCategory;
use crate::cards::Rank;

/// A detector hit: the ranks that name the hand and the slots that make it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub ranks: TieBreakKey,
    pub slots: SlotSet,
}

impl Match {
    fn single(rank: Rank, slots: SlotSet) -> Self {
        Self { ranks: [rank].into_iter().collect(), slots }
    }

    fn pair_of(a: Rank, b: Rank, slots: SlotSet) -> Self {
        Self { ranks: [a, b].into_iter().collect(), slots }
    }
}

impl From<StraightRun> for Match {
    fn from(run: StraightRun) -> Self {
        Match::single(run.high, run.slots)
    }
}

/// Strategy pattern: each detector recognises one category from the grouping.
pub trait CategoryDetector {
    fn detect(&self, grouping: &SlotGrouping<'_>) -> Option<Match>;
}

// ============================================================================
// Detector Implementations (in ladder order: weakest to strongest)
// ============================================================================

/// Exactly `N` slots of one rank; the strongest such rank wins.
pub struct OfAKindDetector<const N: usize>;

impl<const N: usize> CategoryDetector for OfAKindDetector<N> {
    fn detect(&self, grouping: &SlotGrouping<'_>) -> Option<Match> {
        grouping.strongest_with_count(N).map(|(rank, slots)| Match::single(rank, slots))
    }
}

pub type OnePairDetector = OfAKindDetector<2>;
pub type ThreeOfAKindDetector = OfAKindDetector<3>;
pub type FourOfAKindDetector = OfAKindDetector<4>;

/// Two Pair: the two strongest ranks that each hold exactly two slots
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, grouping: &SlotGrouping<'_>) -> Option<Match> {
        let mut pairs = grouping.ranks_desc().filter(|(_, slots)| slots.len() == 2);
        let (high, high_slots) = pairs.next()?;
        let (low, low_slots) = pairs.next()?;
        Some(Match::pair_of(high, low, high_slots.union(low_slots)))
    }
}

/// Straight: five consecutive ranks, any suits
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, grouping: &SlotGrouping<'_>) -> Option<Match> {
        find_straight(grouping).map(Match::from)
    }
}

/// Flush: five or more slots of one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, grouping: &SlotGrouping<'_>) -> Option<Match> {
        let (_, slots) = grouping.flush_suits().next()?;
        let top = slots.iter().map(|slot| grouping.rank_at(slot)).max()?;
        Some(Match::single(top, slots))
    }
}

/// Full House: exactly three of one rank plus two or more of another.
///
/// When the second rank is itself a trip only its first two slots count.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, grouping: &SlotGrouping<'_>) -> Option<Match> {
        let (trips, trip_slots) = grouping.strongest_with_count(3)?;
        let (pair, pair_slots) =
            grouping.ranks_desc().find(|&(rank, slots)| rank != trips && slots.len() >= 2)?;
        Some(Match::pair_of(trips, pair, trip_slots.union(pair_slots.take(2))))
    }
}

/// Straight Flush: a straight inside one suit's slots
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, grouping: &SlotGrouping<'_>) -> Option<Match> {
        find_straight_flush(grouping).map(Match::from)
    }
}

/// Royal Flush: the Ten-to-Ace straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, grouping: &SlotGrouping<'_>) -> Option<Match> {
        find_straight_flush(grouping).filter(StraightRun::is_broadway).map(Match::from)
    }
}

fn find_straight_flush(grouping: &SlotGrouping<'_>) -> Option<StraightRun> {
    grouping.flush_suits().find_map(|(_, mask)| find_straight(&grouping.restricted_to(mask)))
}

// ============================================================================
// Detector ladder (weakest to strongest)
// ============================================================================

/// Detectors in strictly increasing category order.
///
/// The evaluator folds over this list keeping the last hit, so the order is
/// what makes the last hit the strongest. A `const` assertion below rejects
/// any reordering at compile time. High card has no detector: it is what remains
/// when nothing here matches.
pub(crate) const LADDER: [(HandCategory, &dyn CategoryDetector); 9] = [
    (HandCategory::OnePair, &OnePairDetector {}),
    (HandCategory::TwoPair, &TwoPairDetector),
    (HandCategory::ThreeOfAKind, &ThreeOfAKindDetector {}),
    (HandCategory::Straight, &StraightDetector),
    (HandCategory::Flush, &FlushDetector),
    (HandCategory::FullHouse, &FullHouseDetector),
    (HandCategory::FourOfAKind, &FourOfAKindDetector {}),
    (HandCategory::StraightFlush, &StraightFlushDetector),
    (HandCategory::RoyalFlush, &RoyalFlushDetector),
];

const fn is_ascending(ladder: &[(HandCategory, &dyn CategoryDetector)]) -> bool {
    if ladder.is_empty() || ladder[0].0.ordinal() <= HandCategory::HighCard.ordinal() {
        return false;
    }
    let mut i = 1;
    while i < ladder.len() {
        if ladder[i].0.ordinal() <= ladder[i - 1].0.ordinal() {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_ascending(&LADDER), "detector ladder out of order");

/// Only the pair detector can fire while just the hole cards are visible.
pub(crate) const PREFLOP_RUNGS: usize = 1;
