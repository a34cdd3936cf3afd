// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

pub mod project;

/// Filename for quarry manifest files
pub const FILENAME: &str = "Quarry.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("invalid manifest: {0}")]
    Invalid(#[from] project::ValidationError),

    #[error("missing Quarry.toml")]
    Missing,
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    if !path.as_ref().exists() {
        return Err(ManifestError::Missing);
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}
