// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::path::Path;

use alloy::providers::Provider;

use crate::core::{
    artifacts::ArtifactRegistry,
    build::DEFAULT_OUTPUT_DIR,
    deployment::{self, records, records::DeploymentRecord, DeploymentConfig},
    manifest::project::ProjectManifest,
};

/// Deploys the artifacts named by the manifest, in listed order, recording the run.
pub async fn deploy(
    project_root: impl AsRef<Path>,
    manifest: &ProjectManifest,
    config: &DeploymentConfig,
    provider: &impl Provider,
) -> eyre::Result<Vec<DeploymentRecord>> {
    let root = project_root.as_ref();
    let registry = ArtifactRegistry::for_project(root);
    let artifacts = registry.resolve(&manifest.deploy)?;

    let deployed =
        deployment::deploy_artifacts(&artifacts, manifest.rpc.from, config, provider).await?;
    if !deployed.is_empty() {
        let path = records::write_records(root.join(DEFAULT_OUTPUT_DIR), &deployed)?;
        mintln!(
            "deployed {} contracts; recorded to {}",
            deployed.len(),
            path.display()
        );
    }
    Ok(deployed)
}
