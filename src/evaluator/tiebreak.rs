use super::grouping::SlotGrouping;
use super::slots::SlotSet;
use crate::cards::Rank;
use core::cmp::Ordering;
use std::fmt;

/// Ranks of a five-card hand.
pub const HAND_SIZE: usize = 5;

/// Ordered ranks used to break ties between hands of the same category.
///
/// Holds at most five ranks inline, so evaluations stay `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TieBreakKey {
    ranks: [Rank; HAND_SIZE],
    len: u8,
}

impl TieBreakKey {
    pub const fn new() -> Self {
        Self { ranks: [Rank::Two; HAND_SIZE], len: 0 }
    }

    /// Append a rank. Returns false (and drops the rank) once the key is full.
    pub fn push(&mut self, rank: Rank) -> bool {
        let len = self.len as usize;
        if len == HAND_SIZE {
            return false;
        }
        self.ranks[len] = rank;
        self.len += 1;
        true
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<Rank> {
        self.as_slice().first().copied()
    }

    /// Compare entry by entry; the first differing rank decides.
    /// Keys that agree on every shared index are equal.
    pub fn compare(&self, other: &TieBreakKey) -> Ordering {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a.cmp(b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for TieBreakKey {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Rank> for TieBreakKey {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut key = TieBreakKey::new();
        for rank in iter {
            if !key.push(rank) {
                break;
            }
        }
        key
    }
}

impl fmt::Debug for TieBreakKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for TieBreakKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

/// Ranks of the visible slots outside `used`, strongest first, one per slot.
pub(crate) fn kickers(grouping: &SlotGrouping<'_>, used: SlotSet) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = (0..grouping.visible_slots())
        .filter(|&slot| !used.contains(slot))
        .map(|slot| grouping.rank_at(slot))
        .collect();
    ranks.sort_by(|a, b| b.cmp(a));
    ranks
}

/// Extend `key` with kickers from the slots outside `used` until it holds
/// five ranks or the visible slots run out.
pub(crate) fn append_kickers(key: &mut TieBreakKey, grouping: &SlotGrouping<'_>, used: SlotSet) {
    for rank in kickers(grouping, used) {
        if !key.push(rank) {
            break;
        }
    }
}
