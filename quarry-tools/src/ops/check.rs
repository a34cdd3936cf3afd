// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

//! Validate a project without deploying it.

use std::path::Path;

use alloy::providers::ProviderBuilder;

use crate::core::{
    artifacts::ArtifactRegistry,
    manifest::{self, project::ProjectManifest},
    network,
};

/// Loads and validates the manifest, resolves its deploy list against the artifact
/// registry, and (unless offline) probes the RPC endpoint.
pub async fn check(
    project_root: impl AsRef<Path>,
    offline: bool,
    endpoint_override: Option<&str>,
) -> eyre::Result<()> {
    let root = project_root.as_ref();
    let manifest = ProjectManifest::load(root.join(manifest::FILENAME))?;
    greyln!(
        "manifest ok: {} build targets, {} deploy entries",
        manifest.build.len(),
        manifest.deploy.len()
    );

    let registry = ArtifactRegistry::for_project(root);
    let available = registry.list()?;
    greyln!(
        "{} artifacts available in {}",
        available.len(),
        registry.dir().display()
    );

    let missing: Vec<_> = manifest
        .deploy
        .iter()
        .filter(|name| !registry.contains(name))
        .collect();
    if !missing.is_empty() {
        for name in &missing {
            egreyln!("missing artifact: {name}");
        }
        eyre::bail!(
            "{} of {} deploy artifacts missing from {}",
            missing.len(),
            manifest.deploy.len(),
            registry.dir().display(),
        );
    }

    if !offline {
        let endpoint = endpoint_override
            .map(str::to_owned)
            .unwrap_or_else(|| network::endpoint_url(&manifest.rpc));
        network::check_endpoint(&endpoint)?;
        let provider = ProviderBuilder::new().connect(&endpoint).await?;
        let chain_id = network::probe(&provider).await?;
        greyln!("node at {endpoint} reports chain id {chain_id}");
    }

    Ok(())
}
