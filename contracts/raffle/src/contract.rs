//! Core contract implementation for the interval raffle.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use crate::errors::ContractError;
use crate::events;
use crate::oracle::{VrfCoordinatorClient, NUM_WORDS, REQUEST_CONFIRMATIONS};
use crate::payout;
use crate::storage;
use crate::types::{RaffleConfig, RaffleState, UpkeepCheck, UpkeepSnapshot};

#[contract]
pub struct Raffle;

#[contractimpl]
impl Raffle {
    /// Initializes the raffle with its fee, interval and oracle settings (one-time only)
    pub fn initialize(env: Env, admin: Address, config: RaffleConfig) -> Result<(), ContractError> {
        admin.require_auth();

        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        if config.entrance_fee <= 0 {
            return Err(ContractError::InvalidEntranceFee);
        }

        storage::set_admin(&env, &admin);
        storage::set_config(&env, &config);
        storage::set_state(&env, &RaffleState::Open);
        storage::set_last_timestamp(&env, env.ledger().timestamp());

        Ok(())
    }

    /// Enters `payer` into the current round, moving `amount` into the pot.
    /// Anything paid above the entrance fee stays in the pot.
    pub fn enter(env: Env, payer: Address, amount: i128) -> Result<(), ContractError> {
        payer.require_auth();

        let config = storage::get_config(&env)?;

        if amount < config.entrance_fee {
            return Err(ContractError::InsufficientPayment);
        }

        if storage::get_state(&env)? != RaffleState::Open {
            return Err(ContractError::RoundNotOpen);
        }

        storage::extend_settings(&env);
        payout::collect(&env, &config.token, &payer, amount);

        let mut players = storage::get_players(&env);
        players.push_back(payer.clone());
        storage::set_players(&env, &players);

        events::entered(&env, &payer);

        Ok(())
    }

    /// Reports whether a keeper should call `perform_upkeep` now.
    ///
    /// Upkeep is needed once the round is open, `interval` seconds have
    /// passed since the last settlement, and at least one funded entry exists.
    /// Never mutates state; the optional context is accepted for keeper compatibility only.
    pub fn check_upkeep(
        env: Env,
        _context: Option<UpkeepSnapshot>,
    ) -> Result<UpkeepCheck, ContractError> {
        Self::_evaluate_upkeep(&env)
    }

    /// Closes the round and requests randomness from the coordinator.
    /// Returns the request id the coordinator will answer.
    ///
    /// Eligibility is always recomputed here; a snapshot supplied by the
    /// keeper is only logged.
    pub fn perform_upkeep(
        env: Env,
        context: Option<UpkeepSnapshot>,
    ) -> Result<u64, ContractError> {
        let check = Self::_evaluate_upkeep(&env)?;

        if !check.upkeep_needed {
            let snapshot = check.snapshot;
            log!(
                &env,
                "upkeep not needed (balance, players, state, keeper snapshot)",
                snapshot.balance,
                snapshot.num_players,
                snapshot.state,
                context.is_some()
            );
            return Err(ContractError::UpkeepNotNeeded);
        }

        let config = storage::get_config(&env)?;
        let request_id = VrfCoordinatorClient::new(&env, &config.coordinator).request_random_words(
            &config.key_hash,
            &config.subscription_id,
            &REQUEST_CONFIRMATIONS,
            &config.callback_gas_limit,
            &NUM_WORDS,
            &env.current_contract_address(),
        );

        storage::set_state(&env, &RaffleState::Calculating(request_id));
        storage::extend_settings(&env);

        events::upkeep_requested(&env, request_id);

        Ok(request_id)
    }

    /// Settles the round with the coordinator's answer (coordinator only).
    ///
    /// The winner is `players[random_words[0] % players.len()]`. The modulo
    /// mapping is only as uniform as the word range is large relative to the
    /// player count; that bias is accepted.
    ///
    /// The pot is paid before anything is written. If the transfer fails the
    /// call returns `PayoutFailed` and the round stays calculating.
    pub fn fulfill_random_words(
        env: Env,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<(), ContractError> {
        let config = storage::get_config(&env)?;

        config.coordinator.require_auth();

        match storage::get_state(&env)? {
            RaffleState::Calculating(pending) if pending == request_id => {}
            _ => return Err(ContractError::UnknownRequest),
        }

        let word = random_words.first().ok_or(ContractError::EmptyRandomWords)?;

        let players = storage::get_players(&env);
        let winner_index = word
            .checked_rem(players.len() as u64)
            .ok_or(ContractError::IndexOutOfRange)? as u32;
        let winner = players
            .get(winner_index)
            .ok_or(ContractError::IndexOutOfRange)?;

        log!(
            &env,
            "settling request (id, word, index, players)",
            request_id,
            word,
            winner_index,
            players.len()
        );

        let prize = payout::pot(&env, &config.token);
        payout::pay(&env, &config.token, &winner, prize).map_err(|_| ContractError::PayoutFailed)?;

        storage::set_recent_winner(&env, &winner);
        storage::set_state(&env, &RaffleState::Open);
        storage::clear_players(&env);
        storage::set_last_timestamp(&env, env.ledger().timestamp());
        storage::extend_settings(&env);

        events::winner_picked(&env, &winner, prize);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        storage::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<RaffleConfig, ContractError> {
        storage::get_config(&env)
    }

    pub fn get_entrance_fee(env: Env) -> Result<i128, ContractError> {
        Ok(storage::get_config(&env)?.entrance_fee)
    }

    pub fn get_interval(env: Env) -> Result<u64, ContractError> {
        Ok(storage::get_config(&env)?.interval)
    }

    pub fn get_raffle_state(env: Env) -> Result<RaffleState, ContractError> {
        storage::get_state(&env)
    }

    /// Returns the player who entered at `index` in the current round
    pub fn get_player(env: Env, index: u32) -> Result<Address, ContractError> {
        storage::get_players(&env)
            .get(index)
            .ok_or(ContractError::IndexOutOfRange)
    }

    pub fn get_number_of_players(env: Env) -> u32 {
        storage::get_players(&env).len()
    }

    /// Ledger timestamp of initialization or of the most recent settlement
    pub fn get_latest_timestamp(env: Env) -> Result<u64, ContractError> {
        storage::get_last_timestamp(&env)
    }

    pub fn get_recent_winner(env: Env) -> Option<Address> {
        storage::get_recent_winner(&env)
    }

    /// Returns the amount currently held for the next winner
    pub fn get_pot(env: Env) -> Result<i128, ContractError> {
        let config = storage::get_config(&env)?;
        Ok(payout::pot(&env, &config.token))
    }

    pub fn get_num_words() -> u32 {
        NUM_WORDS
    }

    pub fn get_request_confirmations() -> u32 {
        REQUEST_CONFIRMATIONS
    }

    fn _evaluate_upkeep(env: &Env) -> Result<UpkeepCheck, ContractError> {
        let config = storage::get_config(env)?;
        let state = storage::get_state(env)?;
        let last_timestamp = storage::get_last_timestamp(env)?;

        let elapsed = env.ledger().timestamp().saturating_sub(last_timestamp);
        let num_players = storage::get_players(env).len();
        let balance = payout::pot(env, &config.token);

        let is_open = state == RaffleState::Open;
        let time_passed = elapsed >= config.interval;
        let has_players = num_players > 0;
        let has_balance = balance > 0;

        Ok(UpkeepCheck {
            upkeep_needed: is_open && time_passed && has_players && has_balance,
            snapshot: UpkeepSnapshot {
                state,
                balance,
                num_players,
                elapsed,
            },
        })
    }
}
