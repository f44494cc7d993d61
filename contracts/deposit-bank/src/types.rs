use soroban_sdk::{contracterror, contracttype, Address};

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Credit ledger contract that mints interest (persistent storage).
    CreditLedger,
    /// Native asset SAC address holding custodied deposits (persistent storage).
    NativeAsset,
    /// Yearly return rate in percent, 1..=100 (persistent storage).
    YearlyReturnRate,
    /// Deposit record of one account (persistent storage).
    Investor(Address),
}

/// Deposit state of a single account. A cleared record stays in storage
/// with zeroed fields; `has_active_deposit` is the source of truth.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InvestorRecord {
    pub has_active_deposit: bool,
    /// Principal in the native asset's smallest unit.
    pub amount: i128,
    /// Ledger timestamp at which the deposit was accepted.
    pub start_time: u64,
}

/// What a withdrawal paid out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    /// Native asset returned to the depositor.
    pub principal: i128,
    /// Credit minted to the depositor.
    pub interest: i128,
}

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BankError {
    InvalidRate = 1,
    BelowMinimum = 2,
    DuplicateActiveDeposit = 3,
    NoActiveDeposit = 4,
}

impl BankError {
    /// Human-readable reason, stable across releases.
    pub const fn reason(self) -> &'static str {
        match self {
            BankError::InvalidRate => "Yearly return rate must be between 1 and 100",
            BankError::BelowMinimum => "Minimum deposit amount is 1 Ether",
            BankError::DuplicateActiveDeposit => "Account can't have multiple active deposits",
            BankError::NoActiveDeposit => "Account must have an active deposit to withdraw",
        }
    }
}
