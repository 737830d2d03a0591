#![no_std]

//! Interval raffle settled with oracle-delivered randomness.
//!
//! Players `enter` by paying the entrance fee into a shared pot. Once the
//! configured interval has elapsed, a keeper calls `perform_upkeep`, which
//! closes the round and asks a VRF coordinator for a random word. The
//! coordinator answers through `fulfill_random_words`; the contract picks the
//! winner, pays out the whole pot and reopens for the next round.

mod contract;
pub mod errors;
mod events;
pub mod oracle;
mod payout;
mod storage;
pub mod types;

pub use contract::{Raffle, RaffleClient};

#[cfg(test)]
mod tests;
