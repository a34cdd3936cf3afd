// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

pub use build::build;
pub use check::check;
pub use deploy::deploy;
pub use init::init;

mod build;
mod check;
mod deploy;
mod init;
