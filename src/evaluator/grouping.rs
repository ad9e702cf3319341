use super::slots::SlotSet;
use crate::cards::{Card, Rank, Suit};

/// Rank and suit indexes over the visible slots of one player's view.
///
/// `cards[i]` is the card in slot `i`: hole cards first, then the revealed
/// community cards. Slots past `cards.len()` do not exist yet.
#[derive(Debug, Clone)]
pub struct SlotGrouping<'a> {
    cards: &'a [Card],
    rank_slots: [SlotSet; 13],
    suit_slots: [SlotSet; 4],
}

impl<'a> SlotGrouping<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        let mut rank_slots = [SlotSet::EMPTY; 13];
        let mut suit_slots = [SlotSet::EMPTY; 4];
        for (slot, card) in cards.iter().enumerate() {
            rank_slots[card.rank().strength()].insert(slot);
            suit_slots[card.suit().index()].insert(slot);
        }
        Self { cards, rank_slots, suit_slots }
    }

    /// Same cards, with every rank restricted to the slots in `mask`.
    /// Used to look for a straight inside a single suit.
    pub fn restricted_to(&self, mask: SlotSet) -> Self {
        let mut rank_slots = self.rank_slots;
        for slots in rank_slots.iter_mut() {
            *slots = slots.intersection(mask);
        }
        Self { cards: self.cards, rank_slots, suit_slots: self.suit_slots }
    }

    pub fn visible_slots(&self) -> usize {
        self.cards.len()
    }

    pub fn rank_at(&self, slot: usize) -> Rank {
        self.cards[slot].rank()
    }

    pub fn rank_slots(&self, rank: Rank) -> SlotSet {
        self.rank_slots[rank.strength()]
    }

    pub fn suit_slots(&self, suit: Suit) -> SlotSet {
        self.suit_slots[suit.index()]
    }

    /// Ranks strongest first, paired with their slots.
    pub fn ranks_desc(&self) -> impl Iterator<Item = (Rank, SlotSet)> + '_ {
        Rank::ALL.iter().rev().map(move |&r| (r, self.rank_slots(r)))
    }

    /// Strongest rank that occupies exactly `n` slots.
    pub fn strongest_with_count(&self, n: usize) -> Option<(Rank, SlotSet)> {
        self.ranks_desc().find(|(_, slots)| slots.len() == n)
    }

    /// Suits, in enumeration order, that hold at least five slots.
    pub fn flush_suits(&self) -> impl Iterator<Item = (Suit, SlotSet)> + '_ {
        Suit::ALL.iter().map(move |&s| (s, self.suit_slots(s))).filter(|(_, slots)| slots.len() >= 5)
    }
}
