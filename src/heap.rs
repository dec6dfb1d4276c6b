use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,
}

/// Binary min-heap backed by a `Vec`, ordered by `T`'s `Ord`.
///
/// The element at index 0 is always the minimum; for every other index `i`
/// the parent at `(i - 1) / 2` is not larger than `element[i]`.
#[derive(Clone, Debug)]
pub struct MinHeap<T: Ord> {
    elements: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: Vec::new() }
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrows the minimum element without removing it.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.elements.first().ok_or(HeapError::Empty)
    }

    /// Adds a value and sifts it up until its parent is not larger.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the minimum element.
    pub fn remove_min(&mut self) -> Result<T, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.remove(last);
        self.sift_down(0);
        Ok(min)
    }

    /// Empties the heap, returning its elements in ascending order.
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.elements.len());
        while let Ok(min) = self.remove_min() {
            sorted.push(min);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.elements[index] < self.elements[parent] {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < size && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < size && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord + Clone> MinHeap<T> {
    /// Copy of the current internal order, for inspection. Does not alias
    /// the heap's own storage.
    pub fn snapshot(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
