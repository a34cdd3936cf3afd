// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

//! On-disk record of what a deployment run produced.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Filename for deployment records, under the project output directory.
pub const FILENAME: &str = "deployments.json";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

/// Writes the records of a deployment run, returning the path written.
pub fn write_records(dir: impl AsRef<Path>, records: &[DeploymentRecord]) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(FILENAME);
    fs::write(&path, serde_json::to_string_pretty(records)?)?;
    Ok(path)
}

pub fn read_records(dir: impl AsRef<Path>) -> Result<Vec<DeploymentRecord>> {
    let contents = fs::read_to_string(dir.as_ref().join(FILENAME))?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_survive_a_run() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![DeploymentRecord {
            contract_name: "Token".to_string(),
            address: Address::repeat_byte(0x42),
            tx_hash: TxHash::repeat_byte(0x01),
            gas_used: 1_200_000,
        }];

        let path = write_records(dir.path(), &records).unwrap();
        assert_eq!(path.file_name().unwrap(), FILENAME);
        assert_eq!(read_records(dir.path()).unwrap(), records);
    }
}
