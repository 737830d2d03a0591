//! Token movements in and out of the pot.

use soroban_sdk::{contractclient, Address, Env};

use crate::errors::ContractError;

/// The subset of the token interface the raffle relies on.
#[contractclient(name = "PaymentTokenClient")]
pub trait PaymentToken {
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}

/// Current pot: everything the contract holds in the payment token.
pub fn pot(env: &Env, token: &Address) -> i128 {
    PaymentTokenClient::new(env, token).balance(&env.current_contract_address())
}

/// Moves an entry payment from `payer` into the pot. `payer` must have
/// authorized the enclosing call.
pub fn collect(env: &Env, token: &Address, payer: &Address, amount: i128) {
    PaymentTokenClient::new(env, token).transfer(payer, &env.current_contract_address(), &amount);
}

/// Pays `amount` out of the pot to `recipient`.
///
/// A failed transfer is reported as `TransferFailed` instead of aborting the
/// invocation, so the caller can refuse to commit the settlement.
pub fn pay(
    env: &Env,
    token: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }

    match PaymentTokenClient::new(env, token).try_transfer(
        &env.current_contract_address(),
        recipient,
        &amount,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}
