/// An array-backed binary min-heap over `(priority, payload)` entries.
///
/// Ordering uses the priority alone; the payload is opaque cargo and equal
/// priorities pop in unspecified order. There is no arbitrary deletion and no
/// decrease-key: callers that need key decreases push a fresh entry and
/// filter stale ones at pop time against their own source of truth.
///
/// Priorities are compared by partial order. Incomparable values (NaN) are
/// out of contract and will disorder the heap.
#[derive(Debug, Clone)]
pub struct MinHeap<P, T>
where
    P: PartialOrd + Copy,
{
    entries: Vec<(P, T)>,
}

impl<P, T> MinHeap<P, T>
where
    P: PartialOrd + Copy,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Creates a new empty heap with space reserved for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts one entry. Duplicate priorities and payloads are allowed.
    pub fn push(&mut self, priority: P, payload: T) {
        self.entries.push((priority, payload));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns an entry with the smallest priority, or `None`
    /// when the heap is empty.
    pub fn pop(&mut self) -> Option<(P, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let top = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<&(P, T)> {
        self.entries.first()
    }

    // Invariant: entries[(i - 1) / 2].0 <= entries[i].0 for all i > 0.

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[parent].0 <= self.entries[i].0 {
                break;
            }
            self.entries.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < n && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<P, T> Default for MinHeap<P, T>
where
    P: PartialOrd + Copy,
{
    fn default() -> Self {
        MinHeap::new()
    }
}
