use super::RecordType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Same record type, different owner name. Used when chasing an alias.
    pub fn with_domain(&self, domain: impl Into<Arc<str>>) -> Self {
        Self::new(domain, self.record_type)
    }
}
