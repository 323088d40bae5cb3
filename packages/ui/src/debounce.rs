//! Debounced search input support.
//!
//! Keystrokes land in a raw signal immediately; the *committed* value — the
//! one that triggers a fetch — only updates after a quiet period. A burst of
//! typing therefore produces exactly one committed change, carrying the final
//! text.

use dioxus::prelude::*;

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;

/// Generation gate behind the debounce: every keystroke arms a new
/// generation, and only the timer holding the latest key may commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Invalidate all outstanding timers and return the key for a new one.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, key: u64) -> bool {
        key == self.generation
    }
}

/// Follow `source` with a `delay_ms` quiet period.
pub fn use_debounced(source: ReadOnlySignal<String>, delay_ms: u32) -> Signal<String> {
    let mut committed = use_signal(|| source.peek().clone());
    let mut gate = use_signal(DebounceGate::default);

    use_effect(move || {
        let text = source();
        let key = gate.write().arm();
        spawn(async move {
            sleep_ms(u64::from(delay_ms)).await;
            if gate.peek().is_current(key) && *committed.peek() != text {
                committed.set(text);
            }
        });
    });

    committed
}

pub(crate) async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_armed_key_may_commit() {
        let mut gate = DebounceGate::default();

        // Three rapid keystrokes: "a", "ad", "ada".
        let first = gate.arm();
        let second = gate.arm();
        let third = gate.arm();

        let commits = [first, second, third]
            .into_iter()
            .filter(|key| gate.is_current(*key))
            .count();
        assert_eq!(commits, 1);
        assert!(gate.is_current(third));
    }

    #[test]
    fn a_new_keystroke_cancels_an_expired_timer() {
        let mut gate = DebounceGate::default();
        let stale = gate.arm();
        let _fresh = gate.arm();
        assert!(!gate.is_current(stale));
    }
}
