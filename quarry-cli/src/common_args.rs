// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, FixedBytes},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{local::PrivateKeySigner, Signer},
};
use eyre::{bail, eyre, Context};
use quarry_tools::core::{
    build::BuildConfig,
    manifest::{self, project::ProjectManifest, ManifestError},
    network,
};

use crate::utils::{convert_gwei_to_wei, decode0x};

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Path to the project root (the directory containing Quarry.toml)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

impl ProjectArgs {
    pub fn manifest(&self) -> Result<ProjectManifest, ManifestError> {
        ProjectManifest::load(self.path.join(manifest::FILENAME))
    }
}

#[derive(Debug, clap::Args)]
pub struct BuildArgs {
    /// Directory containing build sources (defaults to `app/`).
    #[arg(long)]
    source_dir: Option<PathBuf>,
    /// Directory to write build outputs to (defaults to `build/`).
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub fn config(&self) -> BuildConfig {
        let mut config = BuildConfig::default();
        if let Some(source_dir) = &self.source_dir {
            config.source_dir = source_dir.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        config
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    /// Whether transactions should be signed locally rather than by the node's
    /// unlocked sender account.
    pub fn has_local_signer(&self) -> bool {
        self.private_key.is_some() || self.private_key_path.is_some()
    }

    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(decode0x(key)?.as_slice());
            let signer =
                PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        let file = self
            .private_key_path
            .as_ref()
            .ok_or(eyre!("no private key"))?;
        let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
        let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(decode0x(key)?.as_slice());
        let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint (overrides the manifest's rpc host and port)
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

impl ProviderArgs {
    /// The endpoint to use: the CLI override, or the one the manifest describes.
    pub fn endpoint_for(&self, manifest: &ProjectManifest) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| network::endpoint_url(&manifest.rpc))
    }

    pub async fn build_provider(&self, endpoint: &str) -> eyre::Result<impl Provider> {
        network::check_endpoint(endpoint)?;
        let provider = ProviderBuilder::new().connect(endpoint).await?;
        Ok(provider)
    }

    /// Builds a provider signing locally with the key from `auth`. The signer must
    /// be the manifest's `rpc.from` account.
    pub async fn build_provider_with_wallet(
        &self,
        endpoint: &str,
        auth: &AuthArgs,
        sender: Address,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider(endpoint).await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(endpoint)
            .await?;

        let signer = provider.default_signer_address();
        if signer != sender {
            bail!("signer address {signer} does not match rpc.from {sender}");
        }
        Ok(provider)
    }
}
