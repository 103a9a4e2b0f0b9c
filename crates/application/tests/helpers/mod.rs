mod mock_hierarchy;

pub use mock_hierarchy::{
    a, aaaa, cname, mx, ns, referral, JsonCodec, MockHierarchy, SentQuery,
};
pub use mock_result_cache::MockResultCache;
