//! The looping chat-log script.
//!
//! Messages reveal one at a time with a randomized delay, keeping only the
//! most recent [`CHAT_WINDOW`] visible. After the script is exhausted the
//! log pauses for [`CHAT_LOOP_PAUSE`], clears, and starts over. A pure
//! state machine advanced by the owning view's timer; the only input is
//! time.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;

use crate::types::ChatMessage;

/// Maximum messages visible at once (older ones drop off, FIFO).
pub const CHAT_WINDOW: usize = 5;

/// Pause after the script is exhausted, before clearing and restarting.
pub const CHAT_LOOP_PAUSE: Duration = Duration::from_millis(10_000);

/// Inter-message delay bounds, drawn uniformly from `[MIN, MAX)`.
pub const CHAT_DELAY_MIN_MS: u64 = 2000;
pub const CHAT_DELAY_MAX_MS: u64 = 4500;

/// Stepper over a fixed message script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatScript {
    script: &'static [ChatMessage],
    next: usize,
    visible: VecDeque<&'static ChatMessage>,
}

impl ChatScript {
    pub fn new(script: &'static [ChatMessage]) -> Self {
        Self {
            script,
            next: 0,
            visible: VecDeque::with_capacity(CHAT_WINDOW + 1),
        }
    }

    /// The currently revealed messages, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &'static ChatMessage> + '_ {
        self.visible.iter().copied()
    }

    /// Whether every message in the script has been revealed.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.script.len()
    }

    /// Reveal the next message, dropping the oldest when the window is
    /// full. Returns the revealed message, or None if exhausted.
    pub fn advance(&mut self) -> Option<&'static ChatMessage> {
        let message = self.script.get(self.next)?;
        self.next += 1;
        self.visible.push_back(message);
        if self.visible.len() > CHAT_WINDOW {
            self.visible.pop_front();
        }
        Some(message)
    }

    /// Clear the visible window and restart the script from the top.
    pub fn reset(&mut self) {
        self.next = 0;
        self.visible.clear();
    }

    /// Delay to sleep before the next [`advance`](Self::advance) (random
    /// per message) or before [`reset`](Self::reset) once exhausted.
    pub fn delay(&self) -> Duration {
        if self.is_exhausted() {
            CHAT_LOOP_PAUSE
        } else {
            Duration::from_millis(rand::rng().random_range(CHAT_DELAY_MIN_MS..CHAT_DELAY_MAX_MS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CHAT_SCRIPT;

    #[test]
    fn test_reveals_in_script_order() {
        let mut chat = ChatScript::new(CHAT_SCRIPT);
        for expected in CHAT_SCRIPT {
            let revealed = chat.advance().expect("script not exhausted yet");
            assert_eq!(revealed.id, expected.id);
        }
        assert!(chat.is_exhausted());
        assert!(chat.advance().is_none());
    }

    #[test]
    fn test_window_keeps_only_latest_five() {
        let mut chat = ChatScript::new(CHAT_SCRIPT);
        while chat.advance().is_some() {}

        let visible: Vec<u32> = chat.visible().map(|m| m.id).collect();
        assert_eq!(visible.len(), CHAT_WINDOW);
        // Script has 7 messages; the window holds ids 3..=7 oldest-first.
        assert_eq!(visible, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_reset_restarts_from_top() {
        let mut chat = ChatScript::new(CHAT_SCRIPT);
        while chat.advance().is_some() {}
        chat.reset();

        assert_eq!(chat.visible().count(), 0);
        assert!(!chat.is_exhausted());
        assert_eq!(chat.advance().map(|m| m.id), Some(1));
    }

    #[test]
    fn test_delay_bounds() {
        let mut chat = ChatScript::new(CHAT_SCRIPT);
        for _ in 0..50 {
            let d = chat.delay().as_millis() as u64;
            assert!((CHAT_DELAY_MIN_MS..CHAT_DELAY_MAX_MS).contains(&d));
        }
        while chat.advance().is_some() {}
        assert_eq!(chat.delay(), CHAT_LOOP_PAUSE);
    }

    #[test]
    fn test_empty_script() {
        let mut chat = ChatScript::new(&[]);
        assert!(chat.is_exhausted());
        assert!(chat.advance().is_none());
        assert_eq!(chat.delay(), CHAT_LOOP_PAUSE);
    }
}
