use soroban_sdk::{contracterror, contracttype, Address};

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// The single address allowed to mint (persistent storage).
    Minter,
    /// Credit balance of an account (persistent storage).
    Balance(Address),
    /// Spending allowance granted by `from` to `spender` (temporary storage).
    Allowance(AllowanceKey),
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

/// An allowance together with the ledger after which it lapses.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/// Failures raised by the credit ledger.
///
/// Codes start at 101 so they stay distinguishable from the errors of a
/// contract that calls into the ledger.
#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    Unauthorized = 101,
    InsufficientBalance = 102,
    InsufficientAllowance = 103,
    NegativeAmount = 104,
    InvalidExpiration = 105,
    BalanceOverflow = 106,
}

impl LedgerError {
    /// Human-readable reason, stable across releases.
    pub const fn reason(self) -> &'static str {
        match self {
            LedgerError::Unauthorized => "Caller is not the minter",
            LedgerError::InsufficientBalance => "Insufficient balance",
            LedgerError::InsufficientAllowance => "Insufficient allowance",
            LedgerError::NegativeAmount => "Amount must not be negative",
            LedgerError::InvalidExpiration => "Expiration ledger is in the past",
            LedgerError::BalanceOverflow => "Balance would overflow",
        }
    }
}
