// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

//! Registry over the compiled contract artifacts referenced by the manifest's `deploy` list.
//!
//! Artifacts are produced by an external compiler step; this module only reads them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::utils::decode0x;

/// Default directory for compiled contract artifacts, relative to the project root.
pub const ARTIFACTS_DIR: &str = "artifacts";

/// A compiled, deployable contract artifact.
#[derive(Debug, Deserialize)]
pub struct Artifact {
    pub contract_name: String,
    pub abi: serde_json::Value,
    #[serde(alias = "unlinked_binary")]
    pub bytecode: String,
}

impl Artifact {
    /// The creation bytecode as raw bytes.
    pub fn code(&self) -> Result<Vec<u8>, ArtifactError> {
        let code = decode0x(&self.bytecode)
            .map_err(|err| ArtifactError::MalformedBytecode(self.contract_name.clone(), err))?;
        if code.is_empty() {
            return Err(ArtifactError::EmptyBytecode(self.contract_name.clone()));
        }
        Ok(code)
    }
}

#[derive(Debug)]
pub struct ArtifactRegistry {
    dir: PathBuf,
}

impl ArtifactRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Registry over the default artifact directory of a project.
    pub fn for_project(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(ARTIFACTS_DIR))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of all artifacts present, sorted.
    pub fn list(&self) -> Result<Vec<String>, ArtifactError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names: Vec<_> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension() == Some(std::ffi::OsStr::new("json")))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    pub fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(ArtifactError::Missing(name.to_string(), self.dir.clone()));
        }
        let contents = fs::read_to_string(path)?;
        let artifact = serde_json::from_str(&contents)?;
        Ok(artifact)
    }

    /// Loads the named artifacts, in order, reporting every name without an artifact at once.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<Artifact>, ArtifactError> {
        let missing: Vec<_> = names
            .iter()
            .filter(|name| !self.contains(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(ArtifactError::MissingArtifacts(missing, self.dir.clone()));
        }
        names.iter().map(|name| self.load(name)).collect()
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing artifact {:?} in {}", .0, .1.display())]
    Missing(String, PathBuf),
    #[error("missing artifacts in {}: {}", .1.display(), .0.join(", "))]
    MissingArtifacts(Vec<String>, PathBuf),
    #[error("artifact {0:?} has malformed bytecode: {1}")]
    MalformedBytecode(String, hex::FromHexError),
    #[error("artifact {0:?} has no bytecode")]
    EmptyBytecode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(dir: &Path, name: &str, bytecode: &str) {
        let artifact = serde_json::json!({
            "contract_name": name,
            "abi": [],
            "bytecode": bytecode,
        });
        fs::write(dir.join(format!("{name}.json")), artifact.to_string()).unwrap();
    }

    #[test]
    fn list_and_load() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Token", "0x6001600101");
        write_artifact(dir.path(), "Registry", "6001600101");
        fs::write(dir.path().join("notes.txt"), "not an artifact").unwrap();

        let registry = ArtifactRegistry::new(dir.path());
        assert_eq!(registry.list().unwrap(), ["Registry", "Token"]);

        let token = registry.load("Token").unwrap();
        assert_eq!(token.contract_name, "Token");
        // the prefix is optional in artifact bytecode
        let registry_artifact = registry.load("Registry").unwrap();
        assert_eq!(token.code().unwrap(), registry_artifact.code().unwrap());
    }

    #[test]
    fn resolve_reports_all_missing_names() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Token", "0x00");

        let registry = ArtifactRegistry::new(dir.path());
        let names: Vec<String> = ["Token", "Decoder", "Slicer"]
            .into_iter()
            .map(String::from)
            .collect();
        match registry.resolve(&names) {
            Err(ArtifactError::MissingArtifacts(missing, _)) => {
                assert_eq!(missing, ["Decoder", "Slicer"]);
            }
            other => panic!("expected missing artifacts, got {other:?}"),
        }
    }

    #[test]
    fn resolve_preserves_deploy_order() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Token", "0x01");
        write_artifact(dir.path(), "Decoder", "0x02");

        let registry = ArtifactRegistry::new(dir.path());
        let names: Vec<String> = ["Token", "Decoder"].into_iter().map(String::from).collect();
        let artifacts = registry.resolve(&names).unwrap();
        let resolved: Vec<_> = artifacts.iter().map(|a| a.contract_name.as_str()).collect();
        assert_eq!(resolved, ["Token", "Decoder"]);
    }

    #[test]
    fn artifact_bytecode_errors() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Odd", "0x123");
        write_artifact(dir.path(), "Empty", "0x");

        let registry = ArtifactRegistry::new(dir.path());
        assert!(matches!(
            registry.load("Odd").unwrap().code(),
            Err(ArtifactError::MalformedBytecode(..)),
        ));
        assert!(matches!(
            registry.load("Empty").unwrap().code(),
            Err(ArtifactError::EmptyBytecode(_)),
        ));
    }

    #[test]
    fn legacy_artifacts_use_unlinked_binary() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = serde_json::json!({
            "contract_name": "Token",
            "abi": [],
            "unlinked_binary": "0x6001",
        });
        fs::write(dir.path().join("Token.json"), artifact.to_string()).unwrap();

        let registry = ArtifactRegistry::new(dir.path());
        let token = registry.load("Token").unwrap();
        assert_eq!(token.code().unwrap(), vec![0x60, 0x01]);
    }
}
