//! Falling kana model and spawner

use crate::kana::Kana;
use crate::rng::RandomSource;

/// One kana in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingKana {
    pub kana: Kana,
    /// Rows fallen since spawn (0 = top of the field)
    pub fall_position: u16,
    /// Horizontal slot in `[0, field_width)`
    pub slot: u16,
    /// Matched and frozen until the clear-correct transition runs
    pub marked_correct: bool,
}

impl FallingKana {
    /// Create a kana at the top of the field
    pub fn new(kana: Kana, slot: u16) -> Self {
        Self {
            kana,
            fall_position: 0,
            slot,
            marked_correct: false,
        }
    }

    /// Pick a kana and a slot uniformly at random.
    ///
    /// Slots may collide with kana already on the field. An empty `set` is a
    /// configuration defect; the catalog never produces one.
    pub fn spawn(set: &[Kana], field_width: u16, rng: &mut impl RandomSource) -> Self {
        debug_assert!(!set.is_empty(), "spawn from an empty kana set");
        let kana = set[rng.next_index(set.len()).min(set.len() - 1)];
        let slot = rng.next_index(field_width.max(1) as usize) as u16;
        Self::new(kana, slot)
    }

    /// Advance one row. Returns `true` when the kana reached `max_fall_height`.
    pub fn fall(&mut self, max_fall_height: u16) -> bool {
        self.fall_position = self.fall_position.saturating_add(1);
        self.fall_position >= max_fall_height
    }
}
