// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type QuarryCliResult = Result<(), QuarryCliError>;

#[derive(Debug)]
pub struct QuarryCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl QuarryCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for QuarryCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for QuarryCliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for QuarryCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<quarry_tools::Error> for QuarryCliError {
    fn from(err: quarry_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<quarry_tools::core::build::BuildError> for QuarryCliError {
    fn from(err: quarry_tools::core::build::BuildError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<quarry_tools::core::deployment::DeploymentError> for QuarryCliError {
    fn from(err: quarry_tools::core::deployment::DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<quarry_tools::core::manifest::ManifestError> for QuarryCliError {
    fn from(err: quarry_tools::core::manifest::ManifestError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<quarry_tools::core::network::NetworkError> for QuarryCliError {
    fn from(err: quarry_tools::core::network::NetworkError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
