//! Per-column color assignment
//!
//! Each column keeps a small FIFO cache of recently seen values. The cache is an
//! arena of [`PALETTE_SIZE`] slots plus a reverse index from value to slot; slot
//! `s` always renders as `PALETTE[s]`, so two values live in the same column can
//! never share a color.

use crate::types::{Color, PALETTE, PALETTE_SIZE};
use std::collections::HashMap;

/// Color assignment state for a single column
#[derive(Debug, Clone)]
pub struct FieldTracker {
    /// Reverse index: value -> slot it occupies
    slot_of_value: HashMap<String, usize>,
    /// Slot arena: slot -> value occupying it
    value_of_slot: [Option<String>; PALETTE_SIZE],
    /// Slot to (re)use for the next novel value
    next_slot: usize,
    /// Color most recently emitted for this column, hit or miss
    last_shown: Color,
}

impl Default for FieldTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            slot_of_value: HashMap::with_capacity(PALETTE_SIZE),
            value_of_slot: Default::default(),
            next_slot: 0,
            // Anything but the first color, so the first assignment gets slot 0.
            last_shown: PALETTE[PALETTE_SIZE - 1],
        }
    }

    /// Return the color to render `value` with.
    ///
    /// A tracked value keeps its color. A novel value takes the next slot in
    /// FIFO order, evicting whatever occupied it, except that a slot whose color
    /// matches the previously shown color is skipped once.
    pub fn assign(&mut self, value: &str) -> Color {
        let slot = match self.slot_of_value.get(value) {
            Some(&slot) => slot,
            None => self.insert(value),
        };

        let color = Color::for_slot(slot);
        self.last_shown = color;
        color
    }

    fn insert(&mut self, value: &str) -> usize {
        let mut slot = self.next_slot;
        if Color::for_slot(slot) == self.last_shown {
            slot = (slot + 1) % PALETTE_SIZE;
        }

        if let Some(evicted) = self.value_of_slot[slot].take() {
            log::trace!("Evicting {:?} from slot {}", evicted, slot);
            self.slot_of_value.remove(&evicted);
        }

        self.value_of_slot[slot] = Some(value.to_string());
        self.slot_of_value.insert(value.to_string(), slot);
        self.next_slot = (slot + 1) % PALETTE_SIZE;
        slot
    }

    /// Slot currently held by `value`, if it is tracked
    pub fn slot_of(&self, value: &str) -> Option<usize> {
        self.slot_of_value.get(value).copied()
    }

    /// Color `value` would render with right now, without touching any state
    pub fn peek(&self, value: &str) -> Option<Color> {
        self.slot_of(value).map(Color::for_slot)
    }

    /// Whether `value` is currently tracked
    pub fn contains(&self, value: &str) -> bool {
        self.slot_of_value.contains_key(value)
    }

    /// Number of tracked values (never more than the palette size)
    pub fn len(&self) -> usize {
        self.slot_of_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_of_value.is_empty()
    }

    /// Tracked values in slot order, paired with their slot
    pub fn tracked(&self) -> impl Iterator<Item = (usize, &str)> {
        self.value_of_slot
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.as_deref().map(|v| (slot, v)))
    }

    /// Slot the next novel value will start from
    pub fn next_slot(&self) -> usize {
        self.next_slot
    }

    /// Color most recently returned by [`assign`](Self::assign)
    pub fn last_shown(&self) -> Color {
        self.last_shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Arena and index must describe the same mapping.
    fn assert_consistent(tracker: &FieldTracker) {
        for (value, &slot) in &tracker.slot_of_value {
            assert_eq!(tracker.value_of_slot[slot].as_deref(), Some(value.as_str()));
        }
        for (slot, value) in tracker.tracked() {
            assert_eq!(tracker.slot_of_value.get(value), Some(&slot));
        }
        assert!(tracker.len() <= PALETTE_SIZE);
    }

    #[test]
    fn test_first_value_gets_first_color() {
        let mut tracker = FieldTracker::new();
        assert_eq!(tracker.assign("a"), Color::White);
        assert_eq!(tracker.slot_of("a"), Some(0));
        assert_eq!(tracker.next_slot(), 1);
    }

    #[test]
    fn test_hit_keeps_color_and_slots() {
        let mut tracker = FieldTracker::new();
        tracker.assign("a");
        tracker.assign("b");

        assert_eq!(tracker.assign("a"), Color::White);
        assert_eq!(tracker.assign("a"), Color::White);
        assert_eq!(tracker.next_slot(), 2);
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.last_shown(), Color::White);
    }

    #[test]
    fn test_novel_values_cycle_through_palette() {
        let mut tracker = FieldTracker::new();
        let colors: Vec<Color> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|v| tracker.assign(v))
            .collect();

        assert_eq!(colors, PALETTE.to_vec());
        assert_eq!(tracker.len(), PALETTE_SIZE);
        assert_consistent(&tracker);
    }

    #[test]
    fn test_eighth_value_evicts_first() {
        let mut tracker = FieldTracker::new();
        for v in ["v1", "v2", "v3", "v4", "v5", "v6", "v7"] {
            tracker.assign(v);
        }

        assert_eq!(tracker.assign("v8"), Color::White);
        assert!(!tracker.contains("v1"));
        assert_eq!(tracker.slot_of("v8"), Some(0));
        assert_eq!(tracker.len(), PALETTE_SIZE);
        assert_consistent(&tracker);
    }

    #[test]
    fn test_anti_repeat_skips_one_slot() {
        let mut tracker = FieldTracker::new();
        // "a" takes slot 0 (White); the hit on "a" keeps last shown at White.
        tracker.assign("a");
        tracker.assign("b"); // slot 1, Magenta
        tracker.assign("c"); // slot 2, Cyan
        tracker.assign("d"); // slot 3, Blue
        tracker.assign("e"); // slot 4, Green
        tracker.assign("f"); // slot 5, Yellow
        tracker.assign("g"); // slot 6, Red, cursor wraps to 0

        // Showing "a" (White) makes the natural next slot repeat it.
        assert_eq!(tracker.assign("a"), Color::White);
        assert_eq!(tracker.assign("h"), Color::Magenta);

        // Slot 0 was skipped, so "a" survives and "b" was evicted.
        assert!(tracker.contains("a"));
        assert!(!tracker.contains("b"));
        assert_eq!(tracker.next_slot(), 2);
        assert_consistent(&tracker);
    }

    #[test]
    fn test_slot_colors_follow_palette() {
        let mut tracker = FieldTracker::new();
        for (i, v) in ["a", "b", "c", "d", "e", "f", "g"].iter().enumerate() {
            let color = tracker.assign(v);
            assert_eq!(color, PALETTE[i]);
            assert_eq!(Some(color), tracker.slot_of(v).map(Color::for_slot));
        }
    }

    #[test]
    fn test_empty_string_is_a_value() {
        let mut tracker = FieldTracker::new();
        assert_eq!(tracker.assign(""), Color::White);
        assert_eq!(tracker.assign("x"), Color::Magenta);
        assert_eq!(tracker.assign(""), Color::White);
        assert!(tracker.contains(""));
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut tracker = FieldTracker::new();
        tracker.assign("a");
        tracker.assign("b");

        assert_eq!(tracker.peek("a"), Some(Color::White));
        assert_eq!(tracker.peek("zzz"), None);
        assert_eq!(tracker.last_shown(), Color::Magenta);
    }

    #[test]
    fn test_long_run_stays_consistent() {
        let mut tracker = FieldTracker::new();
        let mut previous = tracker.last_shown();
        for i in 0..200 {
            let value = format!("v{}", (i * 7919) % 13);
            let novel = !tracker.contains(&value);
            let color = tracker.assign(&value);
            if novel {
                assert_ne!(color, previous, "fresh color repeated at step {}", i);
            }
            previous = color;
            assert_consistent(&tracker);
        }
    }
}
