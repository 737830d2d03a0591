//! Type definitions for the interval raffle.

use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    State,
    Players,       // Vec<Address> in entry order
    LastTimestamp, // Ledger timestamp of initialization or last settlement
    RecentWinner,
}

/// Round lifecycle. The outstanding request id travels with `Calculating`,
/// so a round is calculating exactly while a randomness request is pending.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open,
    Calculating(u64),
}

/// Deployment parameters, fixed for the lifetime of the contract.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RaffleConfig {
    pub token: Address,          // Asset the entrance fee and pot are held in
    pub coordinator: Address,    // VRF coordinator allowed to fulfill requests
    pub entrance_fee: i128,
    pub interval: u64,           // Seconds between settlement and next upkeep
    pub key_hash: BytesN<32>,    // Randomness source selector ("gas lane")
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
}

/// Values `check_upkeep` evaluated, echoed back into `perform_upkeep` by
/// keepers that support it.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UpkeepSnapshot {
    pub state: RaffleState,
    pub balance: i128,
    pub num_players: u32,
    pub elapsed: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub snapshot: UpkeepSnapshot,
}
