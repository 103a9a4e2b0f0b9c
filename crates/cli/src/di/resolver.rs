use rootwalk_application::ports::ResultCache;
use rootwalk_application::use_cases::{CollectRecordsUseCase, DelegationResolver};
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{
    HickoryMessageCodec, InMemoryResultCache, NoopResultCache, UdpTransport,
};
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub collect_records: Arc<CollectRecordsUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver_config = &config.resolver;
        let root_servers = resolver_config.root_server_addrs()?;

        info!(
            root_servers = root_servers.len(),
            port = resolver_config.port,
            timeout_secs = resolver_config.query_timeout_secs,
            max_hops = resolver_config.max_hops,
            cache_enabled = resolver_config.cache_enabled,
            "Resolver configured"
        );

        let resolver = DelegationResolver::new(
            Arc::new(HickoryMessageCodec::new()),
            Arc::new(UdpTransport::new()),
            root_servers,
        )
        .with_port(resolver_config.port)
        .with_query_timeout(resolver_config.query_timeout())
        .with_max_hops(resolver_config.max_hops);

        let cache: Arc<dyn ResultCache> = if resolver_config.cache_enabled {
            Arc::new(InMemoryResultCache::new())
        } else {
            Arc::new(NoopResultCache)
        };

        Ok(Self {
            collect_records: Arc::new(CollectRecordsUseCase::new(Arc::new(resolver), cache)),
        })
    }
}
