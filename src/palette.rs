//! Per-sender nickname color assignment.
//!
//! Unlike a hash-based scheme, slots are drawn from a uniform random source
//! the first time a sender is seen and then pinned for the lifetime of the
//! panel instance. Two senders may land on the same slot.

use std::collections::HashMap;

use rand::{Rng, RngCore};

/// Number of distinct nickname color slots.
pub const PALETTE_SIZE: u32 = 12;

/// Maps sender ids to a stable two-digit palette index ("01".."12").
///
/// Entries are append-only: once a sender has a slot it never changes until
/// `reset()` wipes the whole map (used when the panel is reused for a
/// different conversation).
pub struct SenderPalette {
    assigned: HashMap<String, String>,
    rng: Box<dyn RngCore>,
}

impl SenderPalette {
    /// Palette backed by the thread-local generator.
    pub fn new() -> Self {
        Self::with_rng(Box::new(rand::rng()))
    }

    /// Palette backed by a caller-supplied generator, so tests can seed a
    /// deterministic one.
    pub fn with_rng(rng: Box<dyn RngCore>) -> Self {
        Self {
            assigned: HashMap::new(),
            rng,
        }
    }

    /// Two-digit palette index for a sender, assigned on first sight.
    pub fn color_of(&mut self, sender_id: &str) -> String {
        if let Some(color) = self.assigned.get(sender_id) {
            return color.clone();
        }
        let slot = self.rng.random_range(1..=PALETTE_SIZE);
        let color = format!("{slot:02}");
        self.assigned.insert(sender_id.to_string(), color.clone());
        color
    }

    /// Forget every assignment.
    pub fn reset(&mut self) {
        self.assigned.clear();
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for SenderPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> SenderPalette {
        SenderPalette::with_rng(Box::new(StdRng::seed_from_u64(seed)))
    }

    #[test]
    fn test_color_is_stable_per_sender() {
        let mut palette = seeded(7);
        let first = palette.color_of("u1");
        for _ in 0..5 {
            assert_eq!(palette.color_of("u1"), first);
        }
    }

    #[test]
    fn test_color_is_two_digit_in_range() {
        let mut palette = seeded(42);
        for i in 0..100 {
            let color = palette.color_of(&format!("user-{i}"));
            assert_eq!(color.len(), 2);
            let slot: u32 = color.parse().unwrap();
            assert!((1..=PALETTE_SIZE).contains(&slot), "slot {slot} out of range");
        }
    }

    #[test]
    fn test_single_digit_slots_are_zero_padded() {
        let mut palette = seeded(0);
        // Keep drawing until a slot below 10 shows up; with 12 slots and a
        // fixed seed this terminates quickly.
        let color = (0..200)
            .map(|i| palette.color_of(&format!("u{i}")))
            .find(|c| c.parse::<u32>().unwrap() < 10)
            .expect("some sender should land below slot 10");
        assert!(color.starts_with('0'), "expected zero padding, got {color}");
    }

    #[test]
    fn test_reset_clears_assignments() {
        let mut palette = seeded(7);
        palette.color_of("u1");
        palette.color_of("u2");
        assert_eq!(palette.len(), 2);
        palette.reset();
        assert!(palette.is_empty());
        // Re-assignment after reset is a fresh draw; it may or may not match
        // the previous value, but it must again be stable.
        let again = palette.color_of("u1");
        assert_eq!(palette.color_of("u1"), again);
    }

    #[test]
    fn test_distinct_senders_tracked_independently() {
        let mut palette = seeded(3);
        let a = palette.color_of("a");
        let b = palette.color_of("b");
        assert_eq!(palette.color_of("a"), a);
        assert_eq!(palette.color_of("b"), b);
    }
}
