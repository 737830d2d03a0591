//! Notifications published for off-chain observers.

use soroban_sdk::{symbol_short, Address, Env};

pub fn entered(env: &Env, payer: &Address) {
    #[allow(deprecated)]
    env.events()
        .publish((symbol_short!("raffle"), symbol_short!("entered")), payer.clone());
}

pub fn upkeep_requested(env: &Env, request_id: u64) {
    #[allow(deprecated)]
    env.events()
        .publish((symbol_short!("upkeep"), symbol_short!("requested")), request_id);
}

pub fn winner_picked(env: &Env, winner: &Address, amount: i128) {
    #[allow(deprecated)]
    env.events().publish(
        (symbol_short!("winner"), symbol_short!("picked"), winner.clone()),
        amount,
    );
}
