//! The write-then-read interaction with a deployed SimpleStorage contract

use std::sync::Arc;

use ethers::{
    contract::Contract,
    providers::Middleware,
    types::{Address, TransactionReceipt, U256, U64},
};

use crate::{artifact::ContractArtifact, error::InteractError, ScriptSetup};

pub const SET_METHOD: &str = "set";
pub const GET_METHOD: &str = "get";

/// Callable binding of {client, interface, deployed address}.
pub struct ContractHandle<M> {
    contract: Contract<M>,
}

impl<M: Middleware + 'static> ContractHandle<M> {
    /// Bind the deployment registered under `network_id`. Makes no network call.
    pub fn resolve(
        artifact: &ContractArtifact,
        network_id: &str,
        client: Arc<M>,
    ) -> Result<Self, InteractError> {
        let deployment = artifact.deployment(network_id)?;
        let contract = Contract::new(deployment.address, artifact.abi.clone(), client);
        Ok(Self { contract })
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Send `set(value)` from `sender` and wait until the node includes it.
    pub async fn set(
        &self,
        value: U256,
        sender: Address,
    ) -> Result<TransactionReceipt, InteractError> {
        // Type-0 transactions: local dev nodes do not all serve fee history.
        let call = self
            .contract
            .method::<_, ()>(SET_METHOD, value)
            .map_err(|e| interface_error(SET_METHOD, e))?
            .from(sender)
            .legacy();

        let pending = call
            .send()
            .await
            .map_err(|e| InteractError::Transaction(e.to_string()))?;
        let tx_hash = pending.tx_hash();
        tracing::info!(tx_hash = ?tx_hash, "Transaction submitted");

        let receipt = pending
            .await
            .map_err(|e| InteractError::Transaction(e.to_string()))?
            .ok_or_else(|| {
                InteractError::Transaction(format!("transaction {tx_hash:?} was dropped by the node"))
            })?;

        if receipt.status == Some(U64::zero()) {
            return Err(InteractError::Transaction(format!(
                "transaction {tx_hash:?} reverted"
            )));
        }

        tracing::info!(
            tx_hash = ?tx_hash,
            block = ?receipt.block_number,
            gas_used = ?receipt.gas_used,
            "Transaction included"
        );
        Ok(receipt)
    }

    /// Read the stored value with `eth_call`; no transaction is created.
    pub async fn get(&self) -> Result<U256, InteractError> {
        let call = self
            .contract
            .method::<_, U256>(GET_METHOD, ())
            .map_err(|e| interface_error(GET_METHOD, e))?;
        call.call()
            .await
            .map_err(|e| InteractError::Query(e.to_string()))
    }
}

fn interface_error(method: &str, err: impl std::fmt::Display) -> InteractError {
    InteractError::Interface {
        method: method.to_string(),
        reason: err.to_string(),
    }
}

/// Accounts managed by the node, in the node's order.
pub async fn list_accounts<M: Middleware>(client: &M) -> Result<Vec<Address>, InteractError> {
    client
        .get_accounts()
        .await
        .map_err(|e| InteractError::Connection(e.to_string()))
}

/// The first managed account sends the transaction.
pub fn select_sender(accounts: &[Address]) -> Result<Address, InteractError> {
    accounts.first().copied().ok_or(InteractError::NoAccount)
}

/// List accounts, write `value` through `set`, then read it back through `get`.
pub async fn interact<M: Middleware + 'static>(
    setup: &ScriptSetup<M>,
    value: U256,
) -> Result<U256, InteractError> {
    let accounts = list_accounts(setup.client.as_ref()).await?;
    let sender = select_sender(&accounts)?;
    tracing::info!(sender = ?sender, accounts = accounts.len(), "Selected sender");

    setup.storage.set(value, sender).await?;

    let stored = setup.storage.get().await?;
    tracing::debug!(%stored, "Read stored value");
    Ok(stored)
}

pub fn report_line(value: U256) -> String {
    format!("The stored value is: {value}")
}

/// Print the result line to stdout.
pub fn report(value: U256) {
    println!("{}", report_line(value));
}
