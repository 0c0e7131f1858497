use std::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::errors::TopKError;
use crate::traits::TotalOrderKey;

/// A scored candidate: a 32-bit floating-point score paired with an integer identity.
///
/// Entries are ordered by ascending score, with ties broken by ascending id. Scores are
/// compared through [`TotalOrderKey`], so NaN scores have a fixed place in the order
/// (after every other score, all NaNs equal to each other) instead of being incomparable.
///
/// # Examples
///
/// ```
/// use topk_select::top_k::Entry;
///
/// assert!(Entry::new(1.0, 9) < Entry::new(2.0, 0));
/// assert!(Entry::new(1.0, 3) < Entry::new(1.0, 4));
/// assert!(Entry::new(f32::INFINITY, 0) < Entry::new(f32::NAN, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub score: f32,
    pub id: u32,
}

impl Entry {
    pub fn new(score: f32, id: u32) -> Self {
        Self { score, id }
    }

    /// Composite sort key `(score key, id)` that defines the ordering of entries.
    pub fn key(&self) -> (u32, u32) {
        (self.score.total_key(), self.id)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl From<(f32, u32)> for Entry {
    fn from((score, id): (f32, u32)) -> Self {
        Entry::new(score, id)
    }
}

/// How full a [`BoundedTopK`] currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Empty,
    Partial,
    Full,
}

/// A fixed-capacity collection that keeps the `capacity` lowest-ranked entries it has seen,
/// sorted in ascending `(score, id)` order at all times.
///
/// New entries are placed with a binary search and shifted into position. Once the
/// collection is full, accepting a candidate evicts the current worst (last) entry, and a
/// candidate that would sort at or past the end is discarded without any change.
///
/// A candidate whose score and id both equal an entry already held is discarded as well.
/// Entries sharing an id but carrying different scores are kept side by side.
///
/// # Examples
///
/// ```
/// use topk_select::top_k::BoundedTopK;
///
/// let mut top = BoundedTopK::new(3).unwrap();
/// top.insert(5.0, 1);
/// top.insert(2.0, 2);
/// top.insert(8.0, 3);
/// top.insert(1.0, 4); // evicts (8.0, 3)
///
/// let ids: Vec<u32> = top.iter().map(|e| e.id).collect();
/// assert_eq!(ids, vec![4, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedTopK {
    entries: Vec<Entry>,
    capacity: NonZeroUsize,
}

impl BoundedTopK {
    /// Creates an empty collection holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`TopKError::ZeroCapacity`] when `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use topk_select::top_k::BoundedTopK;
    ///
    /// assert!(BoundedTopK::new(0).is_err());
    /// assert_eq!(BoundedTopK::new(4).unwrap().capacity(), 4);
    /// ```
    pub fn new(capacity: usize) -> Result<Self, TopKError> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or(TopKError::ZeroCapacity)
    }

    /// Creates an empty collection from an already validated capacity.
    ///
    /// The backing vector is allocated once, up front, for exactly `capacity` entries.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Offers a `(score, id)` candidate to the collection.
    ///
    /// See [`BoundedTopK::insert_entry`].
    pub fn insert(&mut self, score: f32, id: u32) {
        self.insert_entry(Entry::new(score, id));
    }

    /// Offers a candidate to the collection, keeping the entries sorted.
    ///
    /// The insertion position is found with a binary search. If it lies at or beyond
    /// `capacity` the candidate is dropped. Otherwise, when the collection is full, the
    /// last entry is evicted first and the candidate is shifted into place.
    ///
    /// This never fails: NaN scores and repeated ids are ordinary candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use topk_select::top_k::{BoundedTopK, Entry};
    ///
    /// let mut top = BoundedTopK::new(2).unwrap();
    /// top.insert_entry(Entry::new(0.5, 1));
    /// top.insert_entry(Entry::new(0.7, 2));
    /// top.insert_entry(Entry::new(0.9, 3)); // worse than everything held, discarded
    ///
    /// assert_eq!(top.contents(), &[Entry::new(0.5, 1), Entry::new(0.7, 2)]);
    /// ```
    pub fn insert_entry(&mut self, candidate: Entry) {
        let pos = match self.entries.binary_search_by(|probe| probe.cmp(&candidate)) {
            Ok(_) => return,
            Err(pos) => pos,
        };

        if pos >= self.capacity.get() {
            return;
        }

        if self.entries.len() == self.capacity.get() {
            self.entries.pop();
        }
        self.entries.insert(pos, candidate);
    }

    /// Offers every entry held by `other` to this collection.
    ///
    /// The result is the same as if the candidates that built `other` had been inserted
    /// here directly after the ones already seen.
    pub fn merge(&mut self, other: &BoundedTopK) {
        self.extend(other.iter().copied());
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entries in ascending `(score, id)` order.
    pub fn contents(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity.get()
    }

    /// The lowest-ranked entry, i.e. the first one.
    pub fn best(&self) -> Option<&Entry> {
        self.entries.first()
    }

    /// The entry that would be evicted next, i.e. the last one.
    pub fn worst(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn fill(&self) -> Fill {
        match self.entries.len() {
            0 => Fill::Empty,
            n if n < self.capacity.get() => Fill::Partial,
            _ => Fill::Full,
        }
    }
}

impl Extend<Entry> for BoundedTopK {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert_entry(entry);
        }
    }
}

impl<'a> IntoIterator for &'a BoundedTopK {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
