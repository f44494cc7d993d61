use soroban_sdk::{Address, Env};

use crate::types::{AllowanceKey, AllowanceValue, DataKey};

/// Bump amount for persistent storage entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

// =============================================================================
// Minter
// =============================================================================

pub fn get_minter(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Minter)
        .expect("minter not set")
}

pub fn set_minter(env: &Env, minter: &Address) {
    env.storage().persistent().set(&DataKey::Minter, minter);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Minter, LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Balances
// =============================================================================

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Allowances
// =============================================================================

/// Reads an allowance; one whose expiration ledger has passed reads as zero.
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger < env.ledger().sequence() => {
            AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            }
        }
        Some(allowance) => allowance,
        None => AllowanceValue::default(),
    }
}

pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger.saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}
