//! Indexed binary heap with lazy deletion.
//!
//! [`IndexedPriorityQueue`] keeps unique keys ordered by a float priority
//! while tracking how often each key was inserted. Removing a key only
//! decrements that frequency; entries whose frequency has dropped to zero
//! are physically evicted lazily, when they surface at the head during
//! [`peek`](IndexedPriorityQueue::peek) or
//! [`poll`](IndexedPriorityQueue::poll). This keeps the frequent
//! "remove one occurrence" operation O(1) instead of forcing a heap
//! repair on every decrement.
//!
//! An auxiliary key→slot map is kept consistent on every swap, giving
//! O(1) average lookup and O(log n) amortized insert/update/poll.

use std::collections::HashMap;
use std::hash::Hash;

/// Heap orientation, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `peek`/`poll` answer the smallest priority.
    Min,
    /// `peek`/`poll` answer the largest priority.
    Max,
}

#[derive(Debug, Clone)]
struct Slot<K> {
    key: K,
    /// Priority in effective form: negated for max orientation, so a
    /// single min-heap repair routine serves both orientations.
    priority: f32,
    frequency: usize,
}

/// A binary heap over unique keys with indexed lookup, re-prioritization
/// and lazy deletion.
///
/// # Examples
///
/// ```
/// use pdf_roles::stats::{IndexedPriorityQueue, Orientation};
///
/// let mut queue = IndexedPriorityQueue::new(Orientation::Min);
/// queue.insert("a", 3.0);
/// queue.insert("b", 1.0);
/// queue.insert("c", 2.0);
///
/// assert_eq!(queue.peek(), Some(&"b"));
/// assert_eq!(queue.poll(), Some("b"));
/// assert_eq!(queue.peek(), Some(&"c"));
/// ```
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K: Eq + Hash + Clone> {
    slots: Vec<Slot<K>>,
    index: HashMap<K, usize>,
    orientation: Orientation,
    /// Number of keys with frequency > 0.
    live: usize,
}

impl<K: Eq + Hash + Clone> IndexedPriorityQueue<K> {
    /// Create an empty queue with the given orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            orientation,
            live: 0,
        }
    }

    /// Shorthand for a min-oriented queue.
    pub fn min_oriented() -> Self {
        Self::new(Orientation::Min)
    }

    /// Shorthand for a max-oriented queue.
    pub fn max_oriented() -> Self {
        Self::new(Orientation::Max)
    }

    fn effective(&self, priority: f32) -> f32 {
        match self.orientation {
            Orientation::Min => priority,
            Orientation::Max => -priority,
        }
    }

    /// Number of live keys (frequency > 0).
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no live key remains.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.live = 0;
    }

    /// Insertion count of `key`, 0 if the key was never inserted.
    pub fn frequency(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map_or(0, |&slot| self.slots[slot].frequency)
    }

    /// Current priority of `key`, if present (live or not).
    pub fn priority_of(&self, key: &K) -> Option<f32> {
        let &slot = self.index.get(key)?;
        let stored = self.slots[slot].priority;
        Some(match self.orientation {
            Orientation::Min => stored,
            Orientation::Max => -stored,
        })
    }

    /// Insert `key` with `priority`.
    ///
    /// If the key is already present its frequency is incremented and its
    /// priority updated; otherwise the key is appended and sifted up.
    pub fn insert(&mut self, key: K, priority: f32) {
        let effective = self.effective(priority);
        if let Some(&slot) = self.index.get(&key) {
            if self.slots[slot].frequency == 0 {
                self.live += 1;
            }
            self.slots[slot].frequency += 1;
            self.reprioritize(slot, effective);
        } else {
            let slot = self.slots.len();
            self.slots.push(Slot {
                key: key.clone(),
                priority: effective,
                frequency: 1,
            });
            self.index.insert(key, slot);
            self.sift_up(slot);
            self.live += 1;
        }
    }

    /// Re-prioritize `key` without touching its frequency.
    ///
    /// Sifts up or down depending on the direction of the change; a no-op
    /// for an absent key or an unchanged priority.
    pub fn update_priority(&mut self, key: &K, priority: f32) {
        let effective = self.effective(priority);
        if let Some(&slot) = self.index.get(key) {
            self.reprioritize(slot, effective);
        }
    }

    /// Remove one occurrence of `key`.
    ///
    /// Only the frequency is decremented; the heap shape is untouched.
    /// Zero-frequency entries are evicted lazily by `peek`/`poll`.
    /// A no-op for an absent or already-exhausted key.
    pub fn remove(&mut self, key: &K) {
        if let Some(&slot) = self.index.get(key) {
            if self.slots[slot].frequency > 0 {
                self.slots[slot].frequency -= 1;
                if self.slots[slot].frequency == 0 {
                    self.live -= 1;
                }
            }
        }
    }

    /// The live key with the best priority, if any.
    ///
    /// Takes `&mut self` because exhausted entries surfacing at the head
    /// are physically discarded here.
    pub fn peek(&mut self) -> Option<&K> {
        self.evict_exhausted_head();
        self.slots.first().map(|slot| &slot.key)
    }

    /// Priority of the live head, if any.
    pub fn peek_priority(&mut self) -> Option<f32> {
        self.evict_exhausted_head();
        let stored = self.slots.first()?.priority;
        Some(match self.orientation {
            Orientation::Min => stored,
            Orientation::Max => -stored,
        })
    }

    /// Remove and return the live key with the best priority, if any.
    pub fn poll(&mut self) -> Option<K> {
        self.evict_exhausted_head();
        if self.slots.is_empty() {
            return None;
        }
        let key = self.slots[0].key.clone();
        self.live -= 1;
        self.discard_at(0);
        Some(key)
    }

    fn evict_exhausted_head(&mut self) {
        while let Some(head) = self.slots.first() {
            if head.frequency > 0 {
                break;
            }
            self.discard_at(0);
        }
    }

    /// Physically remove the slot at `at`, restoring the heap order.
    fn discard_at(&mut self, at: usize) {
        let last = self.slots.len() - 1;
        self.swap_slots(at, last);
        let removed = self.slots.pop().expect("slot to discard");
        self.index.remove(&removed.key);
        if at < self.slots.len() {
            self.sift_down(at);
            self.sift_up(at);
        }
    }

    fn reprioritize(&mut self, slot: usize, effective: f32) {
        let old = self.slots[slot].priority;
        self.slots[slot].priority = effective;
        if effective < old {
            self.sift_up(slot);
        } else if effective > old {
            self.sift_down(slot);
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.slots.swap(a, b);
        self.index.insert(self.slots[a].key.clone(), a);
        self.index.insert(self.slots[b].key.clone(), b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.slots[slot].priority < self.slots[parent].priority {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut best = slot;
            if left < self.slots.len() && self.slots[left].priority < self.slots[best].priority {
                best = left;
            }
            if right < self.slots.len() && self.slots[right].priority < self.slots[best].priority {
                best = right;
            }
            if best == slot {
                break;
            }
            self.swap_slots(slot, best);
            slot = best;
        }
    }
}
