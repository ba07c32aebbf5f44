/// Moves a slice into a precomputed order one position at a time.
///
/// Every step is a single swap so the slice stays a permutation of its
/// initial contents between any two steps, which lets callers publish
/// snapshots or stop midway.
pub(crate) struct Rearrange {
    /// `order[k]` is the initial index of the element that belongs at `k`.
    order: Vec<usize>,
    /// Current position of each element, by initial index.
    position: Vec<usize>,
    /// Initial index of the element currently at each position.
    occupant: Vec<usize>,
}

impl Rearrange {
    /// `order` must be a permutation of `0..order.len()`.
    pub(crate) fn new(order: Vec<usize>) -> Self {
        let identity: Vec<_> = (0..order.len()).collect();

        Self {
            order,
            position: identity.clone(),
            occupant: identity,
        }
    }

    /// Move the element that belongs at `k` into place.
    ///
    /// Positions must be placed in increasing order. Returns the position the
    /// element was swapped in from, or `None` if it was already in place.
    pub(crate) fn place<T>(&mut self, data: &mut [T], k: usize) -> Option<usize> {
        let incoming = self.order[k];
        let from = self.position[incoming];

        if from == k {
            return None;
        }

        data.swap(k, from);

        let displaced = self.occupant[k];
        self.occupant[k] = incoming;
        self.occupant[from] = displaced;
        self.position[incoming] = k;
        self.position[displaced] = from;

        Some(from)
    }
}
