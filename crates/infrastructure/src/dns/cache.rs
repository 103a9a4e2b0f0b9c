use dashmap::DashMap;
use rootwalk_application::ports::ResultCache;
use rootwalk_domain::CollectedResult;
use std::sync::Arc;
use tracing::debug;

/// Process-lifetime result cache keyed by the exact input string.
///
/// Entries are never evicted or expired. Two concurrent misses for the same
/// key both resolve; the later insert wins.
#[derive(Debug, Default)]
pub struct InMemoryResultCache {
    entries: DashMap<String, Arc<CollectedResult>>,
}

impl InMemoryResultCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultCache for InMemoryResultCache {
    fn get(&self, name: &str) -> Option<Arc<CollectedResult>> {
        self.entries.get(name).map(|entry| Arc::clone(entry.value()))
    }

    fn insert(&self, name: &str, result: Arc<CollectedResult>) {
        self.entries.insert(name.to_string(), result);
        debug!(domain = %name, entries = self.entries.len(), "Result cached");
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Cache that stores nothing. Used when caching is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResultCache;

impl ResultCache for NoopResultCache {
    fn get(&self, _name: &str) -> Option<Arc<CollectedResult>> {
        None
    }

    fn insert(&self, _name: &str, _result: Arc<CollectedResult>) {}

    fn len(&self) -> usize {
        0
    }
}
