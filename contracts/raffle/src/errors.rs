//! Error codes returned by the raffle contract.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidEntranceFee = 3,

    // Entry validation
    InsufficientPayment = 4,
    RoundNotOpen = 5,

    // Upkeep and fulfillment
    UpkeepNotNeeded = 6,
    UnknownRequest = 7,
    EmptyRandomWords = 8,

    // Settlement
    PayoutFailed = 9,
    TransferFailed = 10,

    IndexOutOfRange = 11,
}
