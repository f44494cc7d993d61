use soroban_sdk::{contractevent, Address};

/// A deposit was accepted and is now custodied.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    #[topic]
    pub investor: Address,
    pub amount: i128,
    pub start_time: u64,
}

/// A deposit was closed: principal returned, interest minted.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdraw {
    #[topic]
    pub investor: Address,
    pub principal: i128,
    pub interest: i128,
}
