// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use quarry_tools::{core::deployment::DeploymentConfig, ops};

use crate::{
    common_args::{AuthArgs, ProjectArgs, ProviderArgs},
    error::QuarryCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    project: ProjectArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> QuarryCliResult {
    let manifest = args.project.manifest()?;
    let endpoint = args.provider.endpoint_for(&manifest);
    let config = DeploymentConfig {
        max_fee_per_gas_wei: args.auth.get_max_fee_per_gas_wei()?,
        estimate_gas: args.estimate_gas,
    };

    // Without a local key, the node is expected to manage the rpc.from account.
    if args.auth.has_local_signer() {
        let provider = args
            .provider
            .build_provider_with_wallet(&endpoint, &args.auth, manifest.rpc.from)
            .await?;
        ops::deploy(&args.project.path, &manifest, &config, &provider).await?;
    } else {
        let provider = args.provider.build_provider(&endpoint).await?;
        ops::deploy(&args.project.path, &manifest, &config, &provider).await?;
    }
    Ok(())
}
