// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

//! Assemble a project's build outputs.

use std::path::{Path, PathBuf};

use crate::core::{
    build::{self, BuildConfig},
    manifest::{self, project::ProjectManifest},
};

/// Assembles the build outputs declared by the project manifest.
pub fn build(project_root: impl AsRef<Path>, config: &BuildConfig) -> eyre::Result<Vec<PathBuf>> {
    let root = project_root.as_ref();
    let manifest = ProjectManifest::load(root.join(manifest::FILENAME))?;
    if manifest.build.is_empty() {
        warn!(@yellow, "no build targets declared");
        return Ok(Vec::new());
    }

    let written = build::build_targets(root, &manifest.build, config)?;
    greyln!(
        "assembled {} outputs into {}",
        written.len(),
        root.join(&config.output_dir).display()
    );
    Ok(written)
}
