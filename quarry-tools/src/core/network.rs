// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use alloy::providers::Provider;

use crate::core::manifest::project::RpcConfig;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unsupported endpoint {0:?}: only http(s) endpoints are supported")]
    UnsupportedScheme(String),

    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}

/// The HTTP endpoint for the node described by the manifest's `rpc` section.
pub fn endpoint_url(rpc: &RpcConfig) -> String {
    format!("http://{}:{}", rpc.host, rpc.port)
}

pub fn check_endpoint(endpoint: &str) -> Result<(), NetworkError> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(NetworkError::UnsupportedScheme(endpoint.to_string()))
    }
}

/// Probes the node, returning its chain id.
pub async fn probe(provider: &impl Provider) -> Result<u64, NetworkError> {
    let chain_id = provider.get_chain_id().await?;
    Ok(chain_id)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;

    use super::*;

    #[test]
    fn endpoint_from_rpc_config() {
        let rpc = RpcConfig {
            host: "localhost".to_string(),
            port: 8101,
            from: Address::ZERO,
        };
        assert_eq!(endpoint_url(&rpc), "http://localhost:8101");
    }

    #[test]
    fn endpoint_schemes() {
        let test_cases = [
            ("http://localhost:8101", true),
            ("https://example.org:8545", true),
            ("ws://localhost:8101", false),
            ("localhost:8101", false),
        ];
        for (endpoint, ok) in test_cases {
            assert_eq!(check_endpoint(endpoint).is_ok(), ok, "{endpoint}");
        }
    }
}
