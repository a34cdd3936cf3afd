// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::{
    core::artifacts::{Artifact, ArtifactError},
    utils::color::{Color, DebugColor},
};

pub mod records;

use records::DeploymentRecord;

#[derive(Debug, Default)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
    pub estimate_gas: bool,
}

/// A pending contract creation transaction.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, code: Vec<u8>, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(code),
            max_fee_per_gas_wei,
        }
    }

    pub fn tx(&self) -> &TransactionRequest {
        &self.tx
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = tx
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to deploy {}\n\
         balance {} < {}",
        .from_address.red(),
        .contract_name,
        .balance.red(),
        format!("{} wei", .required).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        contract_name: String,
        balance: U256,
        required: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt for {0:?}")]
    NoContractAddress(String),
}

/// Deploys the artifacts in listed order, from the sender account.
///
/// With `estimate_gas` set, prints per-artifact gas estimates instead of sending anything.
pub async fn deploy_artifacts(
    artifacts: &[Artifact],
    sender: Address,
    config: &DeploymentConfig,
    provider: &impl Provider,
) -> Result<Vec<DeploymentRecord>, DeploymentError> {
    if artifacts.is_empty() {
        warn!(@yellow, "nothing to deploy");
        return Ok(Vec::new());
    }
    debug!(@grey, "sender address: {}", sender.debug_lavender());

    let mut deployed = Vec::new();
    for artifact in artifacts {
        let name = artifact.contract_name.as_str();
        let code = artifact.code()?;
        let req = DeploymentRequest::new(sender, code, config.max_fee_per_gas_wei);

        let gas = req.estimate_gas(provider).await?;
        let gas_price = req.fee_per_gas(provider).await?;
        if config.estimate_gas {
            greyln!("{name}: estimated {}", format_gas(gas as u128));
            continue;
        }

        let balance = provider
            .get_balance(sender)
            .await
            .map_err(|_| DeploymentError::FailedToGetBalance)?;
        let required = U256::from(gas) * U256::from(gas_price);
        if balance < required {
            return Err(DeploymentError::NotEnoughFunds {
                from_address: sender,
                contract_name: name.to_string(),
                balance,
                required,
            });
        }

        let receipt = req.exec(provider).await?;
        let address = receipt
            .contract_address
            .ok_or_else(|| DeploymentError::NoContractAddress(name.to_string()))?;

        info!(@grey, "deployed {name} at address: {}", address.debug_lavender());
        debug!(@grey, "gas used: {}", format_gas(receipt.gas_used.into()));
        deployed.push(DeploymentRecord {
            contract_name: name.to_string(),
            address,
            tx_hash: receipt.transaction_hash,
            gas_used: receipt.gas_used,
        });
    }

    Ok(deployed)
}

pub fn format_gas(gas: u128) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_request_is_a_creation_tx() {
        let sender = Address::repeat_byte(0x59);
        let req = DeploymentRequest::new(sender, vec![0x60, 0x01], None);
        assert_eq!(req.tx().from, Some(sender));
        assert_eq!(req.tx().to, Some(alloy::primitives::TxKind::Create));
    }
}
