//! Defines the immutable configuration a [`DexClient`](crate::client::DexClient)
//! is built with.

/// Human-readable address prefix on mainnet.
pub const MAINNET_BECH32_PREFIX: &str = "bnb";
/// Human-readable address prefix on testnet.
pub const TESTNET_BECH32_PREFIX: &str = "tbnb";

pub const DEFAULT_MAX_LIMIT: u64 = 1000;
pub const DEFAULT_DEPTH_LEVELS: [u32; 7] = [5, 10, 20, 50, 100, 500, 1000];
pub const DEFAULT_MAX_SEARCH_QUERY_LEN: usize = 1024;
pub const DEFAULT_MAX_SEARCH_PER_PAGE: u32 = 100;

/// Settings shared by every query of a client. It is handed to the client at
/// construction and only ever read afterwards, so one client can serve many
/// concurrent callers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Prefix used to render addresses into query paths and JSON parameters.
    pub bech32_prefix: String,
    /// Largest page size accepted by the paginated queries.
    pub max_limit: u64,
    /// Order-book depths the node serves.
    pub depth_levels: Vec<u32>,
    /// Longest accepted transaction search query, in characters.
    pub max_search_query_len: usize,
    /// Largest page size accepted by transaction search.
    pub max_search_per_page: u32,
}

impl QueryConfig {
    pub fn mainnet() -> Self {
        Self {
            bech32_prefix: MAINNET_BECH32_PREFIX.to_string(),
            max_limit: DEFAULT_MAX_LIMIT,
            depth_levels: DEFAULT_DEPTH_LEVELS.to_vec(),
            max_search_query_len: DEFAULT_MAX_SEARCH_QUERY_LEN,
            max_search_per_page: DEFAULT_MAX_SEARCH_PER_PAGE,
        }
    }

    pub fn testnet() -> Self {
        Self::mainnet().with_bech32_prefix(TESTNET_BECH32_PREFIX)
    }

    pub fn with_bech32_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            bech32_prefix: prefix.into(),
            ..self
        }
    }

    pub fn with_max_limit(self, max_limit: u64) -> Self {
        Self { max_limit, ..self }
    }

    pub fn with_depth_levels(self, depth_levels: Vec<u32>) -> Self {
        Self {
            depth_levels,
            ..self
        }
    }

    pub fn with_max_search_query_len(self, max_search_query_len: usize) -> Self {
        Self {
            max_search_query_len,
            ..self
        }
    }

    pub fn with_max_search_per_page(self, max_search_per_page: u32) -> Self {
        Self {
            max_search_per_page,
            ..self
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_mainnet_defaults() {
        let config: QueryConfig =
            serde_json::from_str(r#"{ "bech32_prefix": "tbnb", "max_limit": 50 }"#)
                .expect("valid config");

        assert_eq!(config.bech32_prefix, TESTNET_BECH32_PREFIX);
        assert_eq!(config.max_limit, 50);
        assert_eq!(config.depth_levels, DEFAULT_DEPTH_LEVELS.to_vec());
        assert_eq!(config, QueryConfig::testnet().with_max_limit(50));
    }
}
