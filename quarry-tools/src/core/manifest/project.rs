// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

//! The project manifest: what to build, what to deploy, and where to deploy it.

use std::{collections::BTreeMap, path::Path};

use alloy::primitives::Address;
use serde::{Deserialize, Deserializer};

use super::ManifestError;
use crate::utils::parse_address;

/// A parsed `Quarry.toml`.
///
/// The manifest is authored by hand, read once per invocation, and never written back. Field
/// names are fixed; unknown keys are rejected at parse time.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectManifest {
    /// Output files to assemble, keyed by output path.
    #[serde(default)]
    pub build: BTreeMap<String, BuildSource>,
    /// Artifact names to deploy, in order.
    #[serde(default)]
    pub deploy: Vec<String>,
    /// Node endpoint and sender account for deployment transactions.
    pub rpc: RpcConfig,
}

/// Source specification for a single build target.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum BuildSource {
    /// Copy a single source path.
    Single(String),
    /// Concatenate the listed source files, in order.
    Concat(Vec<String>),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpcConfig {
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "deserialize_address")]
    pub from: Address,
}

fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_address(&text).map_err(serde::de::Error::custom)
}

impl ProjectManifest {
    /// Loads and validates the manifest at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let manifest: Self = super::load(path)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rpc.port == 0 {
            return Err(ValidationError::PortOutOfRange);
        }
        if self.rpc.host.is_empty() {
            return Err(ValidationError::EmptyHost);
        }

        let mut seen = std::collections::BTreeSet::new();
        for name in &self.deploy {
            if name.is_empty() {
                return Err(ValidationError::EmptyDeployEntry);
            }
            if !seen.insert(name) {
                return Err(ValidationError::DuplicateDeployEntry(name.clone()));
            }
        }

        for (target, source) in &self.build {
            if target.is_empty() {
                return Err(ValidationError::EmptyBuildTarget);
            }
            match source {
                BuildSource::Single(path) if path.is_empty() => {
                    return Err(ValidationError::EmptyBuildSource(target.clone()));
                }
                BuildSource::Concat(paths) if paths.is_empty() => {
                    return Err(ValidationError::NoBuildSources(target.clone()));
                }
                BuildSource::Concat(paths) if paths.iter().any(String::is_empty) => {
                    return Err(ValidationError::EmptyBuildSource(target.clone()));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("rpc.port must be in 1..=65535")]
    PortOutOfRange,
    #[error("rpc.host must not be empty")]
    EmptyHost,
    #[error("deploy entries must not be empty")]
    EmptyDeployEntry,
    #[error("duplicate deploy entry: {0}")]
    DuplicateDeployEntry(String),
    #[error("build targets must not be empty")]
    EmptyBuildTarget,
    #[error("build target {0:?} has an empty source path")]
    EmptyBuildSource(String),
    #[error("build target {0:?} has no sources")]
    NoBuildSources(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MANIFEST: &str = r#"
        deploy = [
            "Token",
            "Registry",
        ]

        [build]
        "index.html" = "index.html"
        "app.js" = ["javascripts/app.js"]
        "images/" = "images/"

        [rpc]
        host = "localhost"
        port = 8101
        from = "329482da2a2c7b2412589d85312765f32514dd59"
    "#;

    #[test]
    fn parse_full_manifest() {
        let manifest: ProjectManifest = toml::from_str(FULL_MANIFEST).expect("failed to parse");
        manifest.validate().expect("failed to validate");

        assert_eq!(manifest.deploy, ["Token", "Registry"]);
        assert_eq!(manifest.rpc.host, "localhost");
        assert_eq!(manifest.rpc.port, 8101);
        assert_eq!(
            manifest.rpc.from,
            parse_address("329482da2a2c7b2412589d85312765f32514dd59").unwrap(),
        );

        assert!(matches!(manifest.build["index.html"], BuildSource::Single(_)));
        match &manifest.build["app.js"] {
            BuildSource::Concat(paths) => assert_eq!(paths, &["javascripts/app.js"]),
            other => panic!("expected sequence source, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let manifest = r#"
            migrate = ["Token"]

            [rpc]
            host = "localhost"
            port = 8101
            from = "329482da2a2c7b2412589d85312765f32514dd59"
        "#;
        assert!(toml::from_str::<ProjectManifest>(manifest).is_err());
    }

    #[test]
    fn parse_rejects_malformed_address() {
        let manifest = r#"
            [rpc]
            host = "localhost"
            port = 8101
            from = "329482da"
        "#;
        assert!(toml::from_str::<ProjectManifest>(manifest).is_err());
    }

    #[test]
    fn validation() {
        let test_cases = [
            ("port zero", 0u16, vec!["Token"], false),
            ("port in range", 8101, vec!["Token"], true),
            ("duplicate deploy entry", 8101, vec!["Token", "Token"], false),
            ("empty deploy entry", 8101, vec![""], false),
            ("empty deploy list", 8101, vec![], true),
        ];
        for (label, port, deploy, ok) in test_cases {
            let manifest = ProjectManifest {
                build: BTreeMap::new(),
                deploy: deploy.into_iter().map(String::from).collect(),
                rpc: RpcConfig {
                    host: "localhost".to_string(),
                    port,
                    from: Address::ZERO,
                },
            };
            assert_eq!(manifest.validate().is_ok(), ok, "{label}");
        }
    }

    #[test]
    fn validation_of_build_sources() {
        let test_cases = [
            (r#""app.js" = """#, false),
            (r#""app.js" = []"#, false),
            (r#""app.js" = [""]"#, false),
            (r#""app.js" = ["javascripts/app.js", "javascripts/extra.js"]"#, true),
        ];
        for (line, ok) in test_cases {
            let manifest = format!(
                r#"
                    [build]
                    {line}

                    [rpc]
                    host = "localhost"
                    port = 8101
                    from = "329482da2a2c7b2412589d85312765f32514dd59"
                "#
            );
            let manifest: ProjectManifest = toml::from_str(&manifest).expect("failed to parse");
            assert_eq!(manifest.validate().is_ok(), ok, "{line}");
        }
    }
}
