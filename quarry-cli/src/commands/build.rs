// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use quarry_tools::ops;

use crate::{
    common_args::{BuildArgs, ProjectArgs},
    error::QuarryCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    build: BuildArgs,
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> QuarryCliResult {
    let config = args.build.config();
    let _written = ops::build(&args.project.path, &config)?;
    Ok(())
}
