use super::resolve_delegation::{DelegationResolver, Resolution};
use crate::ports::ResultCache;
use rootwalk_domain::domain_name::{absolute_name, presentation_name, validate_domain_name};
use rootwalk_domain::{CollectedResult, DnsQuery, DomainError, RecordType, ResolvedRecord};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Looks up CNAME, A, AAAA and MX for one name and caches the result under
/// the exact input string.
pub struct CollectRecordsUseCase {
    resolver: Arc<DelegationResolver>,
    cache: Arc<dyn ResultCache>,
}

impl CollectRecordsUseCase {
    pub fn new(resolver: Arc<DelegationResolver>, cache: Arc<dyn ResultCache>) -> Self {
        Self { resolver, cache }
    }

    pub async fn execute(&self, name: &str) -> Result<Arc<CollectedResult>, DomainError> {
        if let Some(cached) = self.cache.get(name) {
            debug!(domain = %name, "Cache hit");
            return Ok(cached);
        }

        validate_domain_name(name)?;

        let start = Instant::now();
        let fqdn = absolute_name(name);
        let alias = presentation_name(name);
        let mut result = CollectedResult::new();

        for record_type in RecordType::COLLECTED {
            let query = DnsQuery::new(fqdn.as_str(), record_type);

            let records = match self.resolver.resolve_from_root(&query).await? {
                Resolution::Answer(response) => response
                    .answers
                    .iter()
                    .filter_map(|record| ResolvedRecord::from_answer(record, record_type, alias))
                    .collect(),
                Resolution::NotFound => {
                    debug!(domain = %name, record_type = %record_type, "No records found");
                    Vec::new()
                }
            };

            result.set(record_type, records);
        }

        debug!(
            domain = %name,
            records = result.total_records(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Lookup complete"
        );

        let result = Arc::new(result);
        self.cache.insert(name, Arc::clone(&result));
        Ok(result)
    }
}
