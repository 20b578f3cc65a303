use {
    cosmwasm_std::{Order, Record, Storage},
    std::{collections::BTreeMap, ops::Bound},
};

/// A revertible view over a parent store.
///
/// Writes are buffered and only reach the parent on `commit`. Dropping the
/// branch without committing discards every write made through it.
pub struct StoreBranch<'a> {
    parent: &'a mut dyn Storage,
    // key => Some(value) for sets, None for removals
    pending: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> StoreBranch<'a> {
    pub fn new(parent: &'a mut dyn Storage) -> Self {
        Self {
            parent,
            pending: BTreeMap::new(),
        }
    }

    pub fn commit(self) {
        for (key, value) in self.pending {
            match value {
                Some(value) => self.parent.set(&key, &value),
                None => self.parent.remove(&key),
            }
        }
    }
}

impl Storage for StoreBranch<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.pending.get(key) {
            Some(value) => value.clone(),
            None => self.parent.get(key),
        }
    }

    fn range<'b>(
        &'b self,
        start: Option<&[u8]>,
        end:   Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'b> {
        // an inverted range is empty, and BTreeMap::range panics on it
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Box::new(std::iter::empty());
            }
        }

        let mut merged = self
            .parent
            .range(start, end, Order::Ascending)
            .collect::<BTreeMap<_, _>>();

        let lower = start.map_or(Bound::Unbounded, |start| Bound::Included(start.to_vec()));
        let upper = end.map_or(Bound::Unbounded, |end| Bound::Excluded(end.to_vec()));

        for (key, value) in self.pending.range((lower, upper)) {
            match value {
                Some(value) => merged.insert(key.clone(), value.clone()),
                None => merged.remove(key),
            };
        }

        match order {
            Order::Ascending => Box::new(merged.into_iter()),
            Order::Descending => Box::new(merged.into_iter().rev()),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.pending.insert(key.to_vec(), Some(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        self.pending.insert(key.to_vec(), None);
    }
}

// ----------------------------------- Tests -----------------------------------
