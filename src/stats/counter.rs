//! Keyed frequency counters.
//!
//! A counter maps keys to the set of elements sharing that key and keeps
//! frequency ranks (and, for numeric keys, running aggregates) consistent
//! under streaming insert/remove. Three variants cover the key domains:
//!
//! - [`FloatCounter`] — float keys; min/max/most-common/least-common are
//!   each backed by a dedicated [`IndexedPriorityQueue`] kept in lock-step
//!   with every add/remove, and the average is a running incremental mean.
//! - [`IntCounter`] — integer keys; aggregates recomputed lazily on a
//!   dirty flag.
//! - [`ObjectCounter`] — arbitrary hashable keys; frequency ranks
//!   recomputed lazily on a dirty flag.
//!
//! `add` is idempotent per distinct (key, element) pair: the element level
//! is a set, not a multiset, so re-adding an existing pair never changes
//! the counts. Callers that count plain occurrences pass a running index
//! as the element.

use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use std::hash::Hash;

use crate::stats::heap::IndexedPriorityQueue;

/// Shared key→element-set backing used by every counter variant.
#[derive(Debug, Clone)]
struct KeyedSets<K: Eq + Hash, E: Eq + Hash> {
    entries: IndexMap<K, IndexSet<E>>,
    total: usize,
}

impl<K: Eq + Hash, E: Eq + Hash> KeyedSets<K, E> {
    fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            total: 0,
        }
    }

    /// Returns true when the (key, element) pair was newly inserted.
    fn add(&mut self, key: K, element: E) -> bool {
        let inserted = self.entries.entry(key).or_default().insert(element);
        if inserted {
            self.total += 1;
        }
        inserted
    }

    /// Returns true when the (key, element) pair was present and removed.
    fn remove(&mut self, key: &K, element: &E) -> bool {
        let Some(set) = self.entries.get_mut(key) else {
            return false;
        };
        let removed = set.shift_remove(element);
        if removed {
            self.total -= 1;
            if set.is_empty() {
                self.entries.shift_remove(key);
            }
        }
        removed
    }

    fn frequency(&self, key: &K) -> usize {
        self.entries.get(key).map_or(0, IndexSet::len)
    }

    fn elements_of(&self, key: &K) -> Option<&IndexSet<E>> {
        self.entries.get(key)
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.total = 0;
    }
}

// ============================================================================
// ObjectCounter
// ============================================================================

/// Cached frequency ranks, rebuilt on demand after a mutation.
#[derive(Debug, Clone)]
struct Ranks<K> {
    most_common: Option<K>,
    least_common: Option<K>,
}

/// Frequency counter over arbitrary hashable keys.
///
/// # Examples
///
/// ```
/// use pdf_roles::stats::ObjectCounter;
///
/// let mut words: ObjectCounter<&str, usize> = ObjectCounter::new();
/// words.add("the", 0);
/// words.add("the", 1);
/// words.add("of", 2);
///
/// assert_eq!(words.most_common(), Some("the"));
/// assert_eq!(words.frequency(&"the"), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ObjectCounter<K: Eq + Hash + Clone, E: Eq + Hash> {
    sets: KeyedSets<K, E>,
    /// `None` marks the cache dirty.
    ranks: Option<Ranks<K>>,
}

impl<K: Eq + Hash + Clone, E: Eq + Hash> Default for ObjectCounter<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, E: Eq + Hash> ObjectCounter<K, E> {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            sets: KeyedSets::new(),
            ranks: None,
        }
    }

    /// Count `element` under `key`. Idempotent per (key, element) pair.
    pub fn add(&mut self, key: K, element: E) {
        if self.sets.add(key, element) {
            self.ranks = None;
        }
    }

    /// Remove the (key, element) pair; a no-op when absent.
    pub fn remove(&mut self, key: &K, element: &E) {
        if self.sets.remove(key, element) {
            self.ranks = None;
        }
    }

    /// Merge every (key, element) pair of `other` into this counter.
    pub fn absorb(&mut self, other: &ObjectCounter<K, E>)
    where
        E: Clone,
    {
        for (key, elements) in &other.sets.entries {
            for element in elements {
                self.add(key.clone(), element.clone());
            }
        }
    }

    /// Total number of (key, element) memberships.
    pub fn len(&self) -> usize {
        self.sets.total
    }

    /// Whether the counter holds no memberships.
    pub fn is_empty(&self) -> bool {
        self.sets.total == 0
    }

    /// Drop every membership.
    pub fn clear(&mut self) {
        self.sets.clear();
        self.ranks = None;
    }

    /// Number of elements sharing `key`.
    pub fn frequency(&self, key: &K) -> usize {
        self.sets.frequency(key)
    }

    /// The elements sharing `key`, if any.
    pub fn elements_of(&self, key: &K) -> Option<&IndexSet<E>> {
        self.sets.elements_of(key)
    }

    /// The key with the highest frequency. Ties resolve to the key seen
    /// first.
    pub fn most_common(&mut self) -> Option<K> {
        self.refresh();
        self.ranks.as_ref().and_then(|r| r.most_common.clone())
    }

    /// The key with the lowest frequency. Ties resolve to the key seen
    /// first.
    pub fn least_common(&mut self) -> Option<K> {
        self.refresh();
        self.ranks.as_ref().and_then(|r| r.least_common.clone())
    }

    /// The elements sharing the most common key.
    pub fn most_common_elements(&mut self) -> Option<&IndexSet<E>> {
        let key = self.most_common()?;
        self.sets.elements_of(&key)
    }

    fn refresh(&mut self) {
        if self.ranks.is_some() {
            return;
        }
        let mut most: Option<(&K, usize)> = None;
        let mut least: Option<(&K, usize)> = None;
        for (key, elements) in &self.sets.entries {
            let frequency = elements.len();
            if most.map_or(true, |(_, best)| frequency > best) {
                most = Some((key, frequency));
            }
            if least.map_or(true, |(_, worst)| frequency < worst) {
                least = Some((key, frequency));
            }
        }
        self.ranks = Some(Ranks {
            most_common: most.map(|(key, _)| key.clone()),
            least_common: least.map(|(key, _)| key.clone()),
        });
    }
}

// ============================================================================
// IntCounter
// ============================================================================

#[derive(Debug, Clone)]
struct IntAggregates {
    most_common: Option<i32>,
    least_common: Option<i32>,
    min: Option<i32>,
    max: Option<i32>,
    average: Option<f32>,
}

/// Frequency counter over integer keys with lazily recomputed aggregates.
///
/// # Examples
///
/// ```
/// use pdf_roles::stats::IntCounter;
///
/// let mut sizes: IntCounter<usize> = IntCounter::new();
/// sizes.add(12, 0);
/// sizes.add(12, 1);
/// sizes.add(18, 2);
///
/// assert_eq!(sizes.most_common(), Some(12));
/// assert_eq!(sizes.max(), Some(18));
/// assert_eq!(sizes.average(), Some(14.0));
/// ```
#[derive(Debug, Clone)]
pub struct IntCounter<E: Eq + Hash> {
    sets: KeyedSets<i32, E>,
    /// `None` marks the cache dirty.
    aggregates: Option<IntAggregates>,
}

impl<E: Eq + Hash> Default for IntCounter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Eq + Hash> IntCounter<E> {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            sets: KeyedSets::new(),
            aggregates: None,
        }
    }

    /// Count `element` under `key`. Idempotent per (key, element) pair.
    pub fn add(&mut self, key: i32, element: E) {
        if self.sets.add(key, element) {
            self.aggregates = None;
        }
    }

    /// Remove the (key, element) pair; a no-op when absent.
    pub fn remove(&mut self, key: i32, element: &E) {
        if self.sets.remove(&key, element) {
            self.aggregates = None;
        }
    }

    /// Merge every (key, element) pair of `other` into this counter.
    pub fn absorb(&mut self, other: &IntCounter<E>)
    where
        E: Clone,
    {
        for (key, elements) in &other.sets.entries {
            for element in elements {
                self.add(*key, element.clone());
            }
        }
    }

    /// Total number of (key, element) memberships.
    pub fn len(&self) -> usize {
        self.sets.total
    }

    /// Whether the counter holds no memberships.
    pub fn is_empty(&self) -> bool {
        self.sets.total == 0
    }

    /// Drop every membership.
    pub fn clear(&mut self) {
        self.sets.clear();
        self.aggregates = None;
    }

    /// Number of elements sharing `key`.
    pub fn frequency(&self, key: i32) -> usize {
        self.sets.frequency(&key)
    }

    /// The elements sharing `key`, if any.
    pub fn elements_of(&self, key: i32) -> Option<&IndexSet<E>> {
        self.sets.elements_of(&key)
    }

    /// The key with the highest frequency; ties resolve to the key seen
    /// first.
    pub fn most_common(&mut self) -> Option<i32> {
        self.refresh();
        self.aggregates.as_ref().and_then(|a| a.most_common)
    }

    /// The key with the lowest frequency; ties resolve to the key seen
    /// first.
    pub fn least_common(&mut self) -> Option<i32> {
        self.refresh();
        self.aggregates.as_ref().and_then(|a| a.least_common)
    }

    /// The smallest key present.
    pub fn min(&mut self) -> Option<i32> {
        self.refresh();
        self.aggregates.as_ref().and_then(|a| a.min)
    }

    /// The largest key present.
    pub fn max(&mut self) -> Option<i32> {
        self.refresh();
        self.aggregates.as_ref().and_then(|a| a.max)
    }

    /// Mean key value over all memberships.
    pub fn average(&mut self) -> Option<f32> {
        self.refresh();
        self.aggregates.as_ref().and_then(|a| a.average)
    }

    /// The elements sharing the most common key.
    pub fn most_common_elements(&mut self) -> Option<&IndexSet<E>> {
        let key = self.most_common()?;
        self.sets.elements_of(&key)
    }

    fn refresh(&mut self) {
        if self.aggregates.is_some() {
            return;
        }
        let mut most: Option<(i32, usize)> = None;
        let mut least: Option<(i32, usize)> = None;
        let mut min: Option<i32> = None;
        let mut max: Option<i32> = None;
        let mut sum = 0f64;
        for (&key, elements) in &self.sets.entries {
            let frequency = elements.len();
            if most.map_or(true, |(_, best)| frequency > best) {
                most = Some((key, frequency));
            }
            if least.map_or(true, |(_, worst)| frequency < worst) {
                least = Some((key, frequency));
            }
            min = Some(min.map_or(key, |m| m.min(key)));
            max = Some(max.map_or(key, |m| m.max(key)));
            sum += key as f64 * frequency as f64;
        }
        let average = if self.sets.total == 0 {
            None
        } else {
            Some((sum / self.sets.total as f64) as f32)
        };
        self.aggregates = Some(IntAggregates {
            most_common: most.map(|(key, _)| key),
            least_common: least.map(|(key, _)| key),
            min,
            max,
            average,
        });
    }
}

// ============================================================================
// FloatCounter
// ============================================================================

/// Frequency counter over float keys.
///
/// Min, max, most-common and least-common queries are each answered by a
/// dedicated [`IndexedPriorityQueue`] kept in lock-step with the counter,
/// so every rank query is O(log n) amortized under streaming add/remove.
/// The average is a running incremental mean, O(1) per update.
///
/// # Examples
///
/// ```
/// use pdf_roles::stats::FloatCounter;
///
/// let mut heights: FloatCounter<usize> = FloatCounter::new();
/// heights.add(11.5, 0);
/// heights.add(11.5, 1);
/// heights.add(24.0, 2);
///
/// assert_eq!(heights.most_common(), Some(11.5));
/// assert_eq!(heights.min(), Some(11.5));
/// assert_eq!(heights.max(), Some(24.0));
/// assert!((heights.average().unwrap() - 15.666_667).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct FloatCounter<E: Eq + Hash> {
    sets: KeyedSets<OrderedFloat<f32>, E>,
    ascending: IndexedPriorityQueue<OrderedFloat<f32>>,
    descending: IndexedPriorityQueue<OrderedFloat<f32>>,
    /// Frequency-ascending: the head is the least common key.
    rarest: IndexedPriorityQueue<OrderedFloat<f32>>,
    /// Frequency-descending: the head is the most common key.
    commonest: IndexedPriorityQueue<OrderedFloat<f32>>,
    mean: f32,
}

impl<E: Eq + Hash> Default for FloatCounter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Eq + Hash> FloatCounter<E> {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            sets: KeyedSets::new(),
            ascending: IndexedPriorityQueue::min_oriented(),
            descending: IndexedPriorityQueue::max_oriented(),
            rarest: IndexedPriorityQueue::min_oriented(),
            commonest: IndexedPriorityQueue::max_oriented(),
            mean: 0.0,
        }
    }

    /// Count `element` under `key`. Idempotent per (key, element) pair.
    pub fn add(&mut self, key: f32, element: E) {
        let k = OrderedFloat(key);
        if !self.sets.add(k, element) {
            return;
        }
        let n = self.sets.total as f32;
        self.mean += (key - self.mean) / n;
        self.ascending.insert(k, key);
        self.descending.insert(k, key);
        let frequency = self.sets.frequency(&k) as f32;
        self.rarest.insert(k, frequency);
        self.commonest.insert(k, frequency);
    }

    /// Remove the (key, element) pair; a no-op when absent.
    pub fn remove(&mut self, key: f32, element: &E) {
        let k = OrderedFloat(key);
        if !self.sets.remove(&k, element) {
            return;
        }
        let n = self.sets.total as f32;
        self.mean = if self.sets.total == 0 {
            0.0
        } else {
            self.mean + (self.mean - key) / n
        };
        self.ascending.remove(&k);
        self.descending.remove(&k);
        let frequency = self.sets.frequency(&k) as f32;
        self.rarest.update_priority(&k, frequency);
        self.rarest.remove(&k);
        self.commonest.update_priority(&k, frequency);
        self.commonest.remove(&k);
    }

    /// Merge every (key, element) pair of `other` into this counter.
    pub fn absorb(&mut self, other: &FloatCounter<E>)
    where
        E: Clone,
    {
        for (key, elements) in &other.sets.entries {
            for element in elements {
                self.add(key.0, element.clone());
            }
        }
    }

    /// Total number of (key, element) memberships.
    pub fn len(&self) -> usize {
        self.sets.total
    }

    /// Whether the counter holds no memberships.
    pub fn is_empty(&self) -> bool {
        self.sets.total == 0
    }

    /// Drop every membership.
    pub fn clear(&mut self) {
        self.sets.clear();
        self.ascending.clear();
        self.descending.clear();
        self.rarest.clear();
        self.commonest.clear();
        self.mean = 0.0;
    }

    /// Number of elements sharing `key`.
    pub fn frequency(&self, key: f32) -> usize {
        self.sets.frequency(&OrderedFloat(key))
    }

    /// The elements sharing `key`, if any.
    pub fn elements_of(&self, key: f32) -> Option<&IndexSet<E>> {
        self.sets.elements_of(&OrderedFloat(key))
    }

    /// Running mean over all memberships.
    pub fn average(&self) -> Option<f32> {
        if self.sets.total == 0 {
            None
        } else {
            Some(self.mean)
        }
    }

    /// The smallest key present.
    pub fn min(&mut self) -> Option<f32> {
        self.ascending.peek().map(|k| k.0)
    }

    /// The largest key present.
    pub fn max(&mut self) -> Option<f32> {
        self.descending.peek().map(|k| k.0)
    }

    /// The key with the highest frequency.
    pub fn most_common(&mut self) -> Option<f32> {
        self.commonest.peek().map(|k| k.0)
    }

    /// The key with the lowest frequency.
    pub fn least_common(&mut self) -> Option<f32> {
        self.rarest.peek().map(|k| k.0)
    }

    /// Frequency of the most common key.
    pub fn most_common_frequency(&mut self) -> usize {
        self.most_common().map_or(0, |key| self.frequency(key))
    }

    /// The elements sharing the most common key.
    pub fn most_common_elements(&mut self) -> Option<&IndexSet<E>> {
        let key = self.most_common()?;
        self.elements_of(key)
    }

    /// The elements sharing the smallest key.
    pub fn min_elements(&mut self) -> Option<&IndexSet<E>> {
        let key = self.min()?;
        self.elements_of(key)
    }

    /// The elements sharing the largest key.
    pub fn max_elements(&mut self) -> Option<&IndexSet<E>> {
        let key = self.max()?;
        self.elements_of(key)
    }
}
