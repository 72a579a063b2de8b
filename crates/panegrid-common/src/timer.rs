//! Deferred single-shot timers keyed by purpose.
//!
//! Arming a key that is already armed replaces its deadline (restart
//! semantics), so at most one deadline exists per key. Timers only fire
//! when the owner calls [`TimerWheel::expire`] from its poll loop.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Entry {
    deadline: Instant,
    generation: u64,
}

#[derive(Debug)]
pub struct TimerWheel<K> {
    entries: HashMap<K, Entry>,
    next_generation: u64,
}

impl<K: Eq + Hash + Clone> TimerWheel<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Arm `key` to fire `delay` after `now`. Returns the new generation.
    pub fn arm(&mut self, key: K, now: Instant, delay: Duration) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.entries.insert(
            key,
            Entry {
                deadline: now + delay,
                generation,
            },
        );
        generation
    }

    /// Disarm `key`. Returns `true` if it was armed.
    pub fn cancel(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn is_armed(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Generation of the currently armed deadline for `key`.
    pub fn generation(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|e| e.generation)
    }

    pub fn deadline(&self, key: &K) -> Option<Instant> {
        self.entries.get(key).map(|e| e.deadline)
    }

    /// Earliest pending deadline, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.values().map(|e| e.deadline).min()
    }

    /// Remove and return every key whose deadline is at or before `now`,
    /// in firing order.
    pub fn expire(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<(K, Entry)> = self
            .entries
            .iter()
            .filter(|(_, e)| e.deadline <= now)
            .map(|(k, e)| (k.clone(), *e))
            .collect();
        due.sort_by(|a, b| {
            a.1.deadline
                .cmp(&b.1.deadline)
                .then(a.1.generation.cmp(&b.1.generation))
        });
        for (key, _) in &due {
            self.entries.remove(key);
        }
        due.into_iter().map(|(k, _)| k).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for TimerWheel<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_only_after_deadline() {
        let t0 = Instant::now();
        let mut wheel = TimerWheel::new();
        wheel.arm("load", t0, ms(500));

        assert!(wheel.expire(t0 + ms(499)).is_empty());
        assert_eq!(wheel.expire(t0 + ms(500)), vec!["load"]);
        assert!(wheel.is_empty());
    }

    #[test]
    fn rearm_replaces_previous_deadline() {
        let t0 = Instant::now();
        let mut wheel = TimerWheel::new();
        let first = wheel.arm("load", t0, ms(500));
        let second = wheel.arm("load", t0 + ms(300), ms(500));
        assert!(second > first);
        assert_eq!(wheel.len(), 1);

        assert!(wheel.expire(t0 + ms(600)).is_empty());
        assert_eq!(wheel.expire(t0 + ms(800)), vec!["load"]);
    }

    #[test]
    fn cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut wheel = TimerWheel::new();
        wheel.arm(1u8, t0, ms(10));
        assert!(wheel.cancel(&1));
        assert!(!wheel.cancel(&1));
        assert!(wheel.expire(t0 + ms(100)).is_empty());
    }

    #[test]
    fn expire_orders_by_deadline() {
        let t0 = Instant::now();
        let mut wheel = TimerWheel::new();
        wheel.arm("late", t0, ms(300));
        wheel.arm("early", t0, ms(100));
        wheel.arm("middle", t0, ms(200));

        assert_eq!(wheel.next_deadline(), Some(t0 + ms(100)));
        assert_eq!(wheel.expire(t0 + ms(1000)), vec!["early", "middle", "late"]);
        assert_eq!(wheel.next_deadline(), None);
    }
}
