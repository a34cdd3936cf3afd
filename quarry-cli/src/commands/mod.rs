// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use crate::error::QuarryCliResult;

mod build;
mod check;
mod deploy;
mod init;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Assemble the project's build outputs
    #[clap(visible_alias = "b")]
    Build(build::Args),
    /// Check the manifest, artifacts and node endpoint
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// Deploy the project's contract artifacts
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Create a project manifest in an existing directory
    Init(init::Args),
}

pub async fn exec(cmd: Command) -> QuarryCliResult {
    match cmd {
        Command::Build(args) => build::exec(args),
        Command::Check(args) => check::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Init(args) => init::exec(args),
    }
}
