use serde::{Deserialize, Serialize};

use crate::token::TokenDescriptor;

pub const ETHEREUM: u64 = 1;
pub const POLYGON: u64 = 137;
pub const BASE: u64 = 8453;

/// Chain whose first token is offered when the user has not picked one.
pub const DEFAULT_CHAIN_ID: u64 = BASE;

/// A chain together with the tokens the frontend offers on it.
///
/// The first entry of `tokens` is the conventional default for the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescriptor {
    pub id: u64,
    pub name: String,
    pub tokens: Vec<TokenDescriptor>,
}

impl ChainDescriptor {
    pub fn new(id: u64, name: impl Into<String>, tokens: Vec<TokenDescriptor>) -> Self {
        Self {
            id,
            name: name.into(),
            tokens,
        }
    }

    /// The conventional default token for this chain, if any are listed.
    pub fn default_token(&self) -> Option<&TokenDescriptor> {
        self.tokens.first()
    }
}

/// Display name used for chains the registry does not know about.
pub(crate) fn fallback_chain_name(chain_id: u64) -> String {
    format!("Chain {chain_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_chain_name() {
        assert_eq!(fallback_chain_name(99999), "Chain 99999");
    }

    #[test]
    fn test_serialize_camel_case_chain_id() {
        let chain = ChainDescriptor::new(
            BASE,
            "Base",
            vec![TokenDescriptor::new(
                "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
                "USDC",
                "USD Coin",
                6,
                BASE,
            )],
        );
        let json = serde_json::to_value(&chain).unwrap();
        assert_eq!(json["id"], 8453);
        assert_eq!(json["tokens"][0]["chainId"], 8453);
        assert_eq!(json["tokens"][0]["symbol"], "USDC");
    }
}
