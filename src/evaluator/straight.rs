use super::grouping::SlotGrouping;
use super::slots::SlotSet;
use crate::cards::Rank;

/// Ranks of the Ace-low straight, reported with Five as its high card.
const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

/// A five-rank run found among the grouped slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightRun {
    pub high: Rank,
    /// One slot per rank of the run: the first slot recorded for that rank.
    pub slots: SlotSet,
}

impl StraightRun {
    /// Ten through Ace. The wheel reports Five, so only this run has Ace high.
    pub fn is_broadway(&self) -> bool {
        self.high == Rank::Ace
    }
}

/// Find the strongest straight.
///
/// Windows of five consecutive canonical ranks are tried from Ace-high down
/// to Six-high; the wheel is only considered when none of them qualifies.
pub fn find_straight(grouping: &SlotGrouping<'_>) -> Option<StraightRun> {
    Rank::ALL
        .windows(5)
        .rev()
        .find_map(|window| run_from(grouping, window, window[4]))
        .or_else(|| run_from(grouping, &WHEEL, Rank::Five))
}

fn run_from(grouping: &SlotGrouping<'_>, ranks: &[Rank], high: Rank) -> Option<StraightRun> {
    let mut slots = SlotSet::EMPTY;
    for &rank in ranks {
        slots.insert(grouping.rank_slots(rank).first()?);
    }
    Some(StraightRun { high, slots })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn straight_of(s: &str) -> Option<StraightRun> {
        let cards = parse_cards(s).unwrap();
        find_straight(&SlotGrouping::new(&cards))
    }

    #[test]
    fn test_regular_straight() {
        let run = straight_of("Kd Qs Jh Tc 9c").unwrap();
        assert_eq!(run.high, Rank::King);
        assert!(!run.is_broadway());
    }

    #[test]
    fn test_ace_high_straight() {
        let run = straight_of("As Kd Qh Jc Ts").unwrap();
        assert_eq!(run.high, Rank::Ace);
        assert!(run.is_broadway());
    }

    #[test]
    fn test_wheel() {
        let run = straight_of("Ac 2d 3h 4s 5c").unwrap();
        assert_eq!(run.high, Rank::Five);
        assert!(!run.is_broadway());
    }

    #[test]
    fn test_six_high_beats_wheel() {
        let run = straight_of("Ac 2d 3h 4s 5c 6d 9h").unwrap();
        assert_eq!(run.high, Rank::Six);
        assert_eq!(run.slots.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_strongest_window_wins() {
        let run = straight_of("5c 6d 7h 8s 9c Td 2h").unwrap();
        assert_eq!(run.high, Rank::Ten);
    }

    #[test]
    fn test_first_slot_per_rank() {
        let run = straight_of("9s 9h Tc Jd Qh Ks 9d").unwrap();
        assert_eq!(run.high, Rank::King);
        assert_eq!(run.slots.iter().collect::<Vec<_>>(), vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn test_not_straight() {
        assert_eq!(straight_of("As Kd Qh Jc 9s"), None);
        assert_eq!(straight_of("As Ad Kh Qc Jd"), None);
        assert_eq!(straight_of("Ks Qs"), None);
    }
}
