//! Pointer position shared between the input handler and the frame loop
//!
//! The input side overwrites the position whenever the cursor moves; the
//! frame loop takes one [`Pointer`] snapshot per frame and hands it to the
//! scene. Both coordinates live in a single atomic word so a reader never
//! sees `x` from one event and `y` from another.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use glam::Vec2;

/// Bit pattern of "no position yet": two NaNs that `set` never stores
const UNSET: u64 = u64::MAX;

/// Pointer position at the start of a frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    /// `None` until the pointer has moved over the window
    pub position: Option<Vec2>,
}

impl Pointer {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some(Vec2::new(x, y)),
        }
    }

    pub fn absent() -> Self {
        Self { position: None }
    }

    /// Position, or `fallback` when the pointer has not been seen
    pub fn or(&self, fallback: Vec2) -> Vec2 {
        self.position.unwrap_or(fallback)
    }
}

/// Latest pointer position, cheap to clone and share
#[derive(Clone, Debug)]
pub struct PointerTracker {
    packed: Arc<AtomicU64>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            packed: Arc::new(AtomicU64::new(UNSET)),
        }
    }

    /// Record a new position; non-finite input is ignored
    pub fn set(&self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let packed = ((x.to_bits() as u64) << 32) | y.to_bits() as u64;
        self.packed.store(packed, Ordering::Relaxed);
    }

    /// Forget the position, e.g. when the window is recreated
    pub fn clear(&self) {
        self.packed.store(UNSET, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> Pointer {
        let packed = self.packed.load(Ordering::Relaxed);
        if packed == UNSET {
            return Pointer::absent();
        }

        let x = f32::from_bits((packed >> 32) as u32);
        let y = f32::from_bits(packed as u32);
        Pointer::at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_tracker_is_absent() {
        assert_eq!(PointerTracker::new().snapshot(), Pointer::absent());
    }

    #[test]
    fn test_set_then_snapshot() {
        let tracker = PointerTracker::new();
        tracker.set(12.5, -3.0);
        assert_eq!(tracker.snapshot(), Pointer::at(12.5, -3.0));

        tracker.set(0.0, 0.0);
        assert_eq!(tracker.snapshot(), Pointer::at(0.0, 0.0));
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = PointerTracker::new();
        let input_side = tracker.clone();
        input_side.set(400.0, 300.0);
        assert_eq!(tracker.snapshot().position, Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_non_finite_is_ignored() {
        let tracker = PointerTracker::new();
        tracker.set(1.0, 2.0);
        tracker.set(f32::NAN, 2.0);
        assert_eq!(tracker.snapshot(), Pointer::at(1.0, 2.0));

        tracker.clear();
        assert_eq!(tracker.snapshot(), Pointer::absent());
    }

    #[test]
    fn test_updates_from_another_thread() {
        let tracker = PointerTracker::new();
        let writer = tracker.clone();
        std::thread::spawn(move || writer.set(7.0, 9.0))
            .join()
            .expect("writer thread panicked");
        assert_eq!(tracker.snapshot(), Pointer::at(7.0, 9.0));
    }
}
