//! Toast sequencing for advancement sightings.
//!
//! Each distinct advancement id triggers a toast exactly once per session,
//! the first time it scrolls into view. Only one toast is displayed at a
//! time; a newer first-sighting replaces the current toast and restarts its
//! timer (last-write-wins, not a queue). The generation counter lets the
//! owning view tell a stale auto-hide timer from the live one.

use std::collections::HashSet;
use std::time::Duration;

/// How long a toast stays visible before auto-hiding.
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Session-scoped once-per-id toast tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastTracker {
    shown: HashSet<&'static str>,
    generation: u64,
}

impl ToastTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the entity `id` became visible.
    ///
    /// First sighting: returns `Some(generation)` and the caller displays a
    /// toast, hiding it after [`TOAST_DURATION`] only if its generation is
    /// still the latest. Re-sightings return `None` for the rest of the
    /// session.
    pub fn entity_visible(&mut self, id: &'static str) -> Option<u64> {
        if !self.shown.insert(id) {
            return None;
        }
        self.generation += 1;
        tracing::debug!(id, generation = self.generation, "toast due");
        Some(self.generation)
    }

    /// Whether `id` has already had its toast this session.
    pub fn was_shown(&self, id: &str) -> bool {
        self.shown.contains(id)
    }

    /// Generation of the most recently triggered toast.
    pub fn latest_generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sighting_triggers() {
        let mut t = ToastTracker::new();
        assert_eq!(t.entity_visible("root"), Some(1));
        assert!(t.was_shown("root"));
    }

    #[test]
    fn test_once_per_id() {
        let mut t = ToastTracker::new();
        assert!(t.entity_visible("root").is_some());
        assert_eq!(t.entity_visible("root"), None);
        assert_eq!(t.entity_visible("root"), None);
    }

    #[test]
    fn test_generations_increase_for_distinct_ids() {
        let mut t = ToastTracker::new();
        let a = t.entity_visible("a").unwrap();
        let b = t.entity_visible("b").unwrap();
        let c = t.entity_visible("c").unwrap();
        assert!(a < b && b < c);
        assert_eq!(t.latest_generation(), c);
    }

    #[test]
    fn test_stale_generation_detectable() {
        // A toast's auto-hide timer must only fire if no newer toast
        // replaced it in the meantime.
        let mut t = ToastTracker::new();
        let first = t.entity_visible("a").unwrap();
        let second = t.entity_visible("b").unwrap();
        assert_ne!(first, t.latest_generation());
        assert_eq!(second, t.latest_generation());
    }
}
