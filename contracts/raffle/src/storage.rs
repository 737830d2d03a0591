//! Typed access to the raffle's persistent entries.
//!
//! Every write extends the entry's TTL, and each entry, upkeep and settlement
//! refreshes the admin and config, so a raffle that keeps running never has
//! its settings, players or pending request archived.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::{DataKey, RaffleConfig, RaffleState};

/// Persistent entry TTL in ledgers (~30 days at 5s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
/// Extend once the remaining TTL drops below this (~7 days).
pub const PERSISTENT_BUMP_THRESHOLD: u32 = 120_960;

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_LEDGERS);
}

/// Refreshes the entries written only at initialization, so a raffle that
/// keeps running never loses its settings.
pub fn extend_settings(env: &Env) {
    bump(env, &DataKey::Admin);
    bump(env, &DataKey::Config);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
    bump(env, &DataKey::Admin);
}

pub fn get_config(env: &Env) -> Result<RaffleConfig, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &RaffleConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    bump(env, &DataKey::Config);
}

pub fn get_state(env: &Env) -> Result<RaffleState, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_state(env: &Env, state: &RaffleState) {
    env.storage().persistent().set(&DataKey::State, state);
    bump(env, &DataKey::State);
}

pub fn get_players(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Players)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_players(env: &Env, players: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Players, players);
    bump(env, &DataKey::Players);
}

pub fn clear_players(env: &Env) {
    env.storage().persistent().remove(&DataKey::Players);
}

pub fn get_last_timestamp(env: &Env) -> Result<u64, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::LastTimestamp)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_last_timestamp(env: &Env, timestamp: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::LastTimestamp, &timestamp);
    bump(env, &DataKey::LastTimestamp);
}

pub fn get_recent_winner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::RecentWinner)
}

pub fn set_recent_winner(env: &Env, winner: &Address) {
    env.storage().persistent().set(&DataKey::RecentWinner, winner);
    bump(env, &DataKey::RecentWinner);
}
