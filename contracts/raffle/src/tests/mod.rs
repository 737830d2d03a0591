//! Test modules for the interval raffle contract.


use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env,
};

use crate::contract::{Raffle, RaffleClient};
use crate::types::RaffleConfig;
use mocks::{MockVrfCoordinator, MockVrfCoordinatorClient};

pub(crate) const ENTRANCE_FEE: i128 = 10_0000000;
pub(crate) const INTERVAL: u64 = 30;
pub(crate) const CALLBACK_GAS_LIMIT: u32 = 500_000;
pub(crate) const SUBSCRIPTION_ID: u64 = 1;
pub(crate) const STARTING_BALANCE: i128 = 1000_0000000;

/// A deployed raffle wired to a mock coordinator and a Stellar asset token.
pub(crate) struct Setup<'a> {
    pub env: Env,
    pub raffle: RaffleClient<'a>,
    pub coordinator: MockVrfCoordinatorClient<'a>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let issuer = Address::generate(&env);
        let asset = env.register_stellar_asset_contract_v2(issuer);
        let token = TokenClient::new(&env, &asset.address());
        let token_admin = StellarAssetClient::new(&env, &asset.address());

        let coordinator_id = env.register(MockVrfCoordinator, ());
        let coordinator = MockVrfCoordinatorClient::new(&env, &coordinator_id);

        let raffle_id = env.register(Raffle, ());
        let raffle = RaffleClient::new(&env, &raffle_id);

        let admin = Address::generate(&env);
        raffle.initialize(&admin, &config(&env, &asset.address(), &coordinator_id));

        Setup {
            env,
            raffle,
            coordinator,
            token,
            token_admin,
        }
    }

    /// Generates a funded player.
    pub fn player(&self) -> Address {
        let player = Address::generate(&self.env);
        self.token_admin.mint(&player, &STARTING_BALANCE);
        player
    }

    /// Generates a funded player and enters them with the exact fee.
    pub fn enter_player(&self) -> Address {
        let player = self.player();
        self.raffle.enter(&player, &ENTRANCE_FEE);
        player
    }

    pub fn advance_time(&self, seconds: u64) {
        advance(&self.env, seconds);
    }
}

pub(crate) fn advance(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

pub(crate) fn config(env: &Env, token: &Address, coordinator: &Address) -> RaffleConfig {
    RaffleConfig {
        token: token.clone(),
        coordinator: coordinator.clone(),
        entrance_fee: ENTRANCE_FEE,
        interval: INTERVAL,
        key_hash: BytesN::from_array(env, &[7u8; 32]),
        subscription_id: SUBSCRIPTION_ID,
        callback_gas_limit: CALLBACK_GAS_LIMIT,
    }
}
