use thiserror::Error;

/// Unified error type for the payment-tokens library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("unknown token {address} on chain {chain_id}")]
    UnknownToken { chain_id: u64, address: String },

    #[error("config error: {0}")]
    Config(String),
}

/// Errors while parsing a human-entered amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("invalid amount {input:?}: expected digits with an optional '.' separator")]
    InvalidDigits { input: String },
}

/// Errors while assembling a registry from a custom chain list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry must contain at least one chain")]
    NoChains,

    #[error("default chain {chain_id} has no tokens")]
    EmptyDefaultChain { chain_id: u64 },

    #[error("chain {chain_id} is registered more than once")]
    DuplicateChain { chain_id: u64 },

    #[error("token {symbol} declares chain {declared} but is listed under chain {listed}")]
    ChainMismatch {
        symbol: String,
        declared: u64,
        listed: u64,
    },
}
