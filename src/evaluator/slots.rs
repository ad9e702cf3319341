use crate::hand::SLOT_COUNT;
use std::fmt;

/// Ordered set of slot indices over `0..7`, stored as a bit mask.
///
/// Iteration is ascending, which is also the order slots are recorded in
/// while grouping, so "the first slot of a rank" is the lowest index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotSet(u8);

impl SlotSet {
    pub const EMPTY: SlotSet = SlotSet(0);

    /// Insert a slot. Indices outside `0..7` are a caller bug.
    pub fn insert(&mut self, slot: usize) {
        debug_assert!(slot < SLOT_COUNT, "slot {slot} out of range");
        self.0 |= 1 << slot;
    }

    pub const fn contains(self, slot: usize) -> bool {
        slot < SLOT_COUNT && self.0 & (1 << slot) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: SlotSet) -> SlotSet {
        SlotSet(self.0 | other.0)
    }

    pub const fn intersection(self, other: SlotSet) -> SlotSet {
        SlotSet(self.0 & other.0)
    }

    /// Lowest slot in the set.
    pub fn first(self) -> Option<usize> {
        self.iter().next()
    }

    /// The `n` lowest slots.
    pub fn take(self, n: usize) -> SlotSet {
        self.iter().take(n).collect()
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..SLOT_COUNT).filter(move |&s| self.contains(s))
    }
}

impl FromIterator<usize> for SlotSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = SlotSet::EMPTY;
        for slot in iter {
            set.insert(slot);
        }
        set
    }
}

impl fmt::Debug for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
