// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

pub mod artifacts;
pub mod build;
pub mod deployment;
pub mod manifest;
pub mod network;
