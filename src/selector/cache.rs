use std::any::Any;
use std::fmt;

/// Identity of one selector inside a [`SelectorCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectorId(usize);

impl SelectorId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Runtime metrics exposed by the selector cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Arena holding the last inputs and output of every memoized selector.
///
/// Slots are keyed by [`SelectorId`] and type-erased; each selector only
/// reads back the entry type it stored.
#[derive(Default)]
pub struct SelectorCache {
    slots: Vec<Option<Box<dyn Any>>>,
    hits: u64,
    misses: u64,
}

impl fmt::Debug for SelectorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorCache")
            .field("slots", &self.slots.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

impl SelectorCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a slot for a new selector.
    pub fn allocate(&mut self) -> SelectorId {
        self.slots.push(None);
        SelectorId(self.slots.len() - 1)
    }

    pub(crate) fn entry<T: 'static>(&self, id: SelectorId) -> Option<&T> {
        self.slots.get(id.0)?.as_ref()?.downcast_ref::<T>()
    }

    pub(crate) fn store<T: 'static>(&mut self, id: SelectorId, value: T) {
        if id.0 >= self.slots.len() {
            self.slots.resize_with(id.0 + 1, || None);
        }
        self.slots[id.0] = Some(Box::new(value));
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses = self.misses.saturating_add(1);
    }

    /// Drops the cached value of one selector; the next read recomputes it.
    pub fn invalidate(&mut self, id: SelectorId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Drops every cached value while keeping allocated ids valid.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    #[must_use]
    pub fn is_cached(&self, id: SelectorId) -> bool {
        self.slots.get(id.0).is_some_and(Option::is_some)
    }

    #[must_use]
    pub fn stats(&self) -> SelectorCacheStats {
        SelectorCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.slots.iter().filter(|slot| slot.is_some()).count(),
        }
    }
}
