// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use quarry_tools::ops;

use crate::{
    common_args::{ProjectArgs, ProviderArgs},
    error::QuarryCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Skip the RPC endpoint probe.
    #[arg(long)]
    offline: bool,

    #[command(flatten)]
    project: ProjectArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> QuarryCliResult {
    ops::check(
        &args.project.path,
        args.offline,
        args.provider.endpoint.as_deref(),
    )
    .await?;
    Ok(())
}
