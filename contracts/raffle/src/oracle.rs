//! Outbound interface to the VRF coordinator that supplies randomness.

use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Block confirmations the coordinator waits before responding.
pub const REQUEST_CONFIRMATIONS: u32 = 3;
/// Random words requested per round; only the first one is used.
pub const NUM_WORDS: u32 = 1;

/// Coordinator side of the request/fulfillment channel. The coordinator
/// answers each request exactly once by invoking `fulfill_random_words` on
/// `consumer` with the returned request id.
#[contractclient(name = "VrfCoordinatorClient")]
pub trait VrfCoordinator {
    fn request_random_words(
        env: Env,
        key_hash: BytesN<32>,
        subscription_id: u64,
        request_confirmations: u32,
        callback_gas_limit: u32,
        num_words: u32,
        consumer: Address,
    ) -> u64;
}
