use soroban_sdk::{Address, Env};

use crate::types::{DataKey, InvestorRecord};

/// Bump amount for persistent storage entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Credit Ledger Address
// =============================================================================

pub fn get_credit_ledger(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::CreditLedger)
        .expect("credit ledger not set")
}

pub fn set_credit_ledger(env: &Env, ledger: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::CreditLedger, ledger);
    bump(env, &DataKey::CreditLedger);
}

// =============================================================================
// Native Asset Address
// =============================================================================

pub fn get_native_asset(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::NativeAsset)
        .expect("native asset not set")
}

pub fn set_native_asset(env: &Env, asset: &Address) {
    env.storage().persistent().set(&DataKey::NativeAsset, asset);
    bump(env, &DataKey::NativeAsset);
}

// =============================================================================
// Yearly Return Rate
// =============================================================================

pub fn get_yearly_return_rate(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::YearlyReturnRate)
        .expect("yearly return rate not set")
}

pub fn set_yearly_return_rate(env: &Env, rate: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::YearlyReturnRate, &rate);
    bump(env, &DataKey::YearlyReturnRate);
}

// =============================================================================
// Investors
// =============================================================================

/// Returns the account's record, or the zeroed record if it never deposited.
pub fn get_investor(env: &Env, investor: &Address) -> InvestorRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Investor(investor.clone()))
        .unwrap_or_default()
}

pub fn set_investor(env: &Env, investor: &Address, record: &InvestorRecord) {
    let key = DataKey::Investor(investor.clone());
    env.storage().persistent().set(&key, record);
    bump(env, &key);
}
