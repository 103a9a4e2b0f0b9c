use rootwalk_domain::CollectedResult;
use std::sync::Arc;

/// Process-lifetime store of collected results, keyed by the exact string
/// the user typed. No normalization, no expiry.
pub trait ResultCache: Send + Sync {
    fn get(&self, name: &str) -> Option<Arc<CollectedResult>>;

    fn insert(&self, name: &str, result: Arc<CollectedResult>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
