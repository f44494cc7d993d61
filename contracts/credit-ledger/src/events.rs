use soroban_sdk::{contractevent, Address};

/// Credit created by the minter.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mint {
    #[topic]
    pub minter: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

/// The mint capability moved to a new holder.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterChanged {
    #[topic]
    pub previous: Address,
    pub new_minter: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approve {
    #[topic]
    pub from: Address,
    #[topic]
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Burn {
    #[topic]
    pub from: Address,
    pub amount: i128,
}
