#![no_std]

//! Deposit Bank: custodies native-asset deposits, one active deposit per
//! account, and on withdrawal returns the principal and mints time-proportional
//! interest on the credit ledger.

mod credit;
mod events;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, I256};

pub use credit::CreditMintClient;
pub use types::{BankError, InvestorRecord, Payout};

/// Smallest accepted deposit: one whole native unit at 18 decimals.
///
/// The floor is counted in the native asset's smallest units regardless of
/// that asset's own precision. Against native XLM (7 decimals, so 10^18
/// stroops is more than the total supply) no deposit can clear it; deploy
/// against an 18-decimal asset.
pub const MIN_DEPOSIT: i128 = 1_000_000_000_000_000_000;

pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 3600;

pub const MIN_YEARLY_RETURN_RATE: u32 = 1;
pub const MAX_YEARLY_RETURN_RATE: u32 = 100;

#[contract]
pub struct DepositBank;

/// Logs the reason and hands the error back for the caller to return.
/// Returning it fails the invocation and rolls back its effects.
fn fail<T>(env: &Env, err: BankError) -> Result<T, BankError> {
    log!(env, "deposit bank call failed", String::from_str(env, err.reason()));
    Err(err)
}

/// Simple interest on `amount` at `rate` percent per year over `elapsed`
/// seconds, rounded down.
///
/// The product is formed in 256 bits so no principal, rate and elapsed time
/// can overflow it. A quotient beyond `i128` saturates.
pub fn interest_for(env: &Env, amount: i128, rate: u32, elapsed: u64) -> i128 {
    let numerator = I256::from_i128(env, amount)
        .mul(&I256::from_i128(env, rate as i128))
        .mul(&I256::from_i128(env, elapsed as i128));
    let denominator = I256::from_i128(env, 100 * SECONDS_PER_YEAR as i128);
    numerator.div(&denominator).to_i128().unwrap_or(i128::MAX)
}

fn accrued(env: &Env, record: &InvestorRecord) -> i128 {
    let elapsed = env.ledger().timestamp().saturating_sub(record.start_time);
    interest_for(env, record.amount, storage::get_yearly_return_rate(env), elapsed)
}

#[contractimpl]
impl DepositBank {
    /// Initialize the bank with the credit ledger that pays interest, the
    /// yearly return rate in percent and the native asset it custodies.
    ///
    /// The rate is fixed for the life of the contract.
    pub fn __constructor(
        env: Env,
        credit_ledger: Address,
        yearly_return_rate: u32,
        native_asset: Address,
    ) {
        if !(MIN_YEARLY_RETURN_RATE..=MAX_YEARLY_RETURN_RATE).contains(&yearly_return_rate) {
            let err = BankError::InvalidRate;
            log!(&env, "deposit bank construction failed", String::from_str(&env, err.reason()));
            env.panic_with_error(err);
        }
        storage::set_credit_ledger(&env, &credit_ledger);
        storage::set_yearly_return_rate(&env, yearly_return_rate);
        storage::set_native_asset(&env, &native_asset);
    }

    /// Lock `amount` of the native asset with the bank.
    ///
    /// The caller must not already have an active deposit, and `amount` must
    /// be at least [`MIN_DEPOSIT`].
    pub fn deposit(env: Env, caller: Address, amount: i128) -> Result<InvestorRecord, BankError> {
        caller.require_auth();
        if amount < MIN_DEPOSIT {
            return fail(&env, BankError::BelowMinimum);
        }
        if storage::get_investor(&env, &caller).has_active_deposit {
            return fail(&env, BankError::DuplicateActiveDeposit);
        }

        let native = token::Client::new(&env, &storage::get_native_asset(&env));
        native.transfer(&caller, &env.current_contract_address(), &amount);

        let record = InvestorRecord {
            has_active_deposit: true,
            amount,
            start_time: env.ledger().timestamp(),
        };
        storage::set_investor(&env, &caller, &record);

        events::Deposit {
            investor: caller,
            amount: record.amount,
            start_time: record.start_time,
        }
        .publish(&env);

        Ok(record)
    }

    /// Close the caller's deposit: return the principal in the native asset
    /// and mint the accrued interest as credit.
    ///
    /// Fails as a whole if the bank does not hold the credit ledger's minter
    /// role; the ledger's `Unauthorized` error surfaces unchanged.
    pub fn withdraw(env: Env, caller: Address) -> Result<Payout, BankError> {
        caller.require_auth();

        let record = storage::get_investor(&env, &caller);
        if !record.has_active_deposit {
            return fail(&env, BankError::NoActiveDeposit);
        }

        let payout = Payout {
            principal: record.amount,
            interest: accrued(&env, &record),
        };

        storage::set_investor(
            &env,
            &caller,
            &InvestorRecord {
                has_active_deposit: false,
                amount: 0,
                start_time: record.start_time,
            },
        );

        let bank = env.current_contract_address();
        let native = token::Client::new(&env, &storage::get_native_asset(&env));
        native.transfer(&bank, &caller, &payout.principal);

        CreditMintClient::new(&env, &storage::get_credit_ledger(&env)).mint(
            &bank,
            &caller,
            &payout.interest,
        );

        events::Withdraw {
            investor: caller,
            principal: payout.principal,
            interest: payout.interest,
        }
        .publish(&env);

        Ok(payout)
    }

    pub fn yearly_return_rate(env: Env) -> u32 {
        storage::get_yearly_return_rate(&env)
    }

    /// Deposit record of `investor`; zeroed if it never deposited.
    pub fn investors(env: Env, investor: Address) -> InvestorRecord {
        storage::get_investor(&env, &investor)
    }

    /// Interest a withdrawal by `investor` at the current ledger time would
    /// mint. Zero without an active deposit.
    pub fn accrued_interest(env: Env, investor: Address) -> i128 {
        let record = storage::get_investor(&env, &investor);
        if !record.has_active_deposit {
            return 0;
        }
        accrued(&env, &record)
    }

    pub fn credit_ledger(env: Env) -> Address {
        storage::get_credit_ledger(&env)
    }

    pub fn native_asset(env: Env) -> Address {
        storage::get_native_asset(&env)
    }
}
