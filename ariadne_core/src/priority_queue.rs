use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PriorityQueueError {
    #[error("Priority queue is empty")]
    Empty,
    #[error("Element {0} is not in the priority queue")]
    ElementNotFound(usize),
    #[error("Element {0} already exists in the priority queue")]
    ElementAlreadyExists(usize),
    #[error("Element {id} is out of bounds, capacity is {capacity}")]
    OutOfBounds { id: usize, capacity: usize },
}

/// Binary min-heap over dense ids `0..capacity`.
///
/// `positions` maps every id to its slot in `heap`, and is kept up to date on
/// every swap, which makes removing an arbitrary element O(log n).
pub struct PriorityQueue<P>
where
    P: Ord,
{
    heap: Vec<(usize, P)>,
    positions: Vec<Option<usize>>,
}

impl<P> PriorityQueue<P>
where
    P: Ord + Copy,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity.min(1024)),
            positions: vec![None; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.positions.get(id).is_some_and(Option::is_some)
    }

    pub fn priority(&self, id: usize) -> Option<P> {
        let position = (*self.positions.get(id)?)?;
        Some(self.heap[position].1)
    }

    pub fn insert(&mut self, id: usize, priority: P) -> Result<(), PriorityQueueError> {
        if id >= self.positions.len() {
            return Err(PriorityQueueError::OutOfBounds {
                id,
                capacity: self.positions.len(),
            });
        }

        if self.contains(id) {
            return Err(PriorityQueueError::ElementAlreadyExists(id));
        }

        let index = self.heap.len();
        self.heap.push((id, priority));
        self.positions[id] = Some(index);
        self.sift_up(index);

        Ok(())
    }

    pub fn peek(&self) -> Option<&(usize, P)> {
        self.heap.first()
    }

    pub fn delete_min(&mut self) -> Result<(usize, P), PriorityQueueError> {
        if self.heap.is_empty() {
            return Err(PriorityQueueError::Empty);
        }

        Ok(self.remove_at(0))
    }

    /// Removes `id` wherever it sits in the heap.
    pub fn remove(&mut self, id: usize) -> Result<P, PriorityQueueError> {
        let position = self
            .positions
            .get(id)
            .copied()
            .flatten()
            .ok_or(PriorityQueueError::ElementNotFound(id))?;

        Ok(self.remove_at(position).1)
    }

    fn remove_at(&mut self, index: usize) -> (usize, P) {
        let (id, priority) = self.heap.swap_remove(index);
        self.positions[id] = None;

        if index < self.heap.len() {
            // The last element now fills the hole, it can move either way
            self.positions[self.heap[index].0] = Some(index);
            let index = self.sift_up(index);
            self.sift_down(index);
        }

        (id, priority)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].0] = Some(a);
        self.positions[self.heap[b].0] = Some(b);
    }

    fn sift_up(&mut self, element_index: usize) -> usize {
        let mut index = element_index;
        while index > 0 {
            let parent_index = (index - 1) >> 1;
            if self.heap[index].1 >= self.heap[parent_index].1 {
                break;
            }
            self.swap(index, parent_index);
            index = parent_index;
        }

        index
    }

    fn sift_down(&mut self, element_index: usize) {
        let size = self.heap.len();
        let mut index = element_index;

        loop {
            let left_child_index = (index << 1) + 1;
            if left_child_index >= size {
                break;
            }

            let right_child_index = left_child_index + 1;
            let mut child_index = left_child_index;
            if right_child_index < size
                && self.heap[right_child_index].1 < self.heap[left_child_index].1
            {
                child_index = right_child_index;
            }

            if self.heap[index].1 <= self.heap[child_index].1 {
                break;
            }

            self.swap(index, child_index);
            index = child_index;
        }
    }

    /// Checks the heap property and the positions table.
    pub fn is_valid(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|index| {
            let parent_index = (index - 1) >> 1;
            self.heap[parent_index].1 <= self.heap[index].1
        });

        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(index, &(id, _))| self.positions[id] == Some(index));

        let tracked = self.positions.iter().flatten().count() == self.heap.len();

        ordered && indexed && tracked
    }
}
