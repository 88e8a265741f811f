use serde::{Deserialize, Serialize};

/// Token contract metadata for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    /// Contract address. Hex casing carries no meaning; compare with
    /// [`TokenDescriptor::has_address`].
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "chainId")]
    pub chain_id: u64,
}

impl TokenDescriptor {
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u8,
        chain_id: u64,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            chain_id,
        }
    }

    /// Case-insensitive address comparison.
    pub fn has_address(&self, address: &str) -> bool {
        self.address.eq_ignore_ascii_case(address)
    }
}

/// Trait for token metadata providers.
pub trait TokenSource {
    fn lookup(&self, chain_id: u64, address: &str) -> Option<TokenDescriptor>;
}

/// A no-op token source that always returns None.
pub struct EmptyTokenSource;

impl TokenSource for EmptyTokenSource {
    fn lookup(&self, _chain_id: u64, _address: &str) -> Option<TokenDescriptor> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_address_case_insensitive() {
        let token = TokenDescriptor::new(
            "0xdAC17F958D2ee523a2206206994597C13D831ec7",
            "USDT",
            "Tether USD",
            6,
            1,
        );
        assert!(token.has_address("0xdac17f958d2ee523a2206206994597c13d831ec7"));
        assert!(token.has_address("0xDAC17F958D2EE523A2206206994597C13D831EC7"));
        assert!(!token.has_address("0xdac17f958d2ee523a2206206994597c13d831ec8"));
    }

    #[test]
    fn test_empty_source() {
        assert!(EmptyTokenSource.lookup(1, "0xabc").is_none());
    }

    #[test]
    fn test_deserialize_from_frontend_json() {
        let json = r#"{
            "address": "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174",
            "symbol": "USDC",
            "name": "USD Coin (PoS)",
            "decimals": 6,
            "chainId": 137
        }"#;
        let token: TokenDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(token.chain_id, 137);
        assert_eq!(token.decimals, 6);
    }
}
