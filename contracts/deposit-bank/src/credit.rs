use soroban_sdk::{contractclient, Address, Env};

/// The part of the credit ledger the bank calls into. The bank must hold the
/// ledger's minter role for `mint` to succeed.
#[contractclient(name = "CreditMintClient")]
pub trait CreditMint {
    fn mint(env: Env, minter: Address, to: Address, amount: i128);
}
