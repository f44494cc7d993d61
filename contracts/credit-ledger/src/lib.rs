#![no_std]

//! Credit Ledger: a fungible credit token whose supply grows only through a
//! single, transferable minter role. The deposit bank holds that role and
//! mints interest to depositors when they withdraw.

mod events;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

pub use types::LedgerError;

/// Credit is issued with the same precision as the native currency it pays
/// interest on.
pub const DECIMALS: u32 = 18;

#[contract]
pub struct CreditLedger;

/// Logs the reason and hands the error back for the caller to return.
/// Returning it fails the invocation and rolls back its effects.
fn fail<T>(env: &Env, err: LedgerError) -> Result<T, LedgerError> {
    log!(env, "credit ledger call failed", String::from_str(env, err.reason()));
    Err(err)
}

fn check_minter(env: &Env, minter: &Address) -> Result<(), LedgerError> {
    minter.require_auth();
    if *minter != storage::get_minter(env) {
        return fail(env, LedgerError::Unauthorized);
    }
    Ok(())
}

fn check_nonnegative_amount(env: &Env, amount: i128) -> Result<(), LedgerError> {
    if amount < 0 {
        return fail(env, LedgerError::NegativeAmount);
    }
    Ok(())
}

fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), LedgerError> {
    let balance = storage::get_balance(env, from);
    if balance < amount {
        return fail(env, LedgerError::InsufficientBalance);
    }
    storage::set_balance(env, from, balance - amount);
    Ok(())
}

fn receive_balance(env: &Env, to: &Address, amount: i128) -> Result<(), LedgerError> {
    let Some(balance) = storage::get_balance(env, to).checked_add(amount) else {
        return fail(env, LedgerError::BalanceOverflow);
    };
    storage::set_balance(env, to, balance);
    Ok(())
}

fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    let allowance = storage::get_allowance(env, from, spender);
    if allowance.amount < amount {
        return fail(env, LedgerError::InsufficientAllowance);
    }
    if amount > 0 {
        storage::set_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
    Ok(())
}

#[contractimpl]
impl CreditLedger {
    /// Initialize the ledger. `minter` is the deploying identity and holds the
    /// mint capability until it passes it on.
    pub fn __constructor(env: Env, minter: Address, name: String, symbol: String) {
        storage::set_minter(&env, &minter);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: DECIMALS,
            name,
            symbol,
        });
    }

    /// Mint `amount` credit to `to`. Only the current minter may call this.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        check_minter(&env, &minter)?;
        check_nonnegative_amount(&env, amount)?;

        receive_balance(&env, &to, amount)?;

        events::Mint { minter, to, amount }.publish(&env);
        Ok(())
    }

    /// Hand the mint capability to `new_minter`. Only the current minter may
    /// call this, and may do so any number of times.
    pub fn pass_minter_role(
        env: Env,
        minter: Address,
        new_minter: Address,
    ) -> Result<(), LedgerError> {
        check_minter(&env, &minter)?;
        storage::set_minter(&env, &new_minter);

        events::MinterChanged {
            previous: minter,
            new_minter,
        }
        .publish(&env);
        Ok(())
    }

    pub fn minter(env: Env) -> Address {
        storage::get_minter(&env)
    }

    // =========================================================================
    // Token interface
    // =========================================================================

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender).amount
    }

    /// Allow `spender` to move up to `amount` of `from`'s credit until
    /// `expiration_ledger`. Replaces any previous allowance.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), LedgerError> {
        from.require_auth();
        check_nonnegative_amount(&env, amount)?;
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return fail(&env, LedgerError::InvalidExpiration);
        }

        storage::set_allowance(&env, &from, &spender, amount, expiration_ledger);

        events::Approve {
            from,
            spender,
            amount,
            expiration_ledger,
        }
        .publish(&env);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        check_nonnegative_amount(&env, amount)?;

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        events::Transfer { from, to, amount }.publish(&env);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        spender.require_auth();
        check_nonnegative_amount(&env, amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        events::Transfer { from, to, amount }.publish(&env);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        check_nonnegative_amount(&env, amount)?;

        spend_balance(&env, &from, amount)?;

        events::Burn { from, amount }.publish(&env);
        Ok(())
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        spender.require_auth();
        check_nonnegative_amount(&env, amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;

        events::Burn { from, amount }.publish(&env);
        Ok(())
    }

    pub fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    pub fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    pub fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
