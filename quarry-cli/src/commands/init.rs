// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use quarry_tools::ops;

use crate::error::QuarryCliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Path to existing directory
    #[clap(default_value = ".")]
    path: PathBuf,
    /// Overwrite an existing manifest
    #[arg(long)]
    force: bool,
}

pub fn exec(args: Args) -> QuarryCliResult {
    ops::init(args.path, args.force)?;
    Ok(())
}
