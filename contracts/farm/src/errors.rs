use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    AdminNotSet = 3,
    InvalidAmount = 4,
    NothingStaked = 5,
    InsufficientRewardPool = 6,
    TransferFailed = 7,
    Overflow = 8,
}
