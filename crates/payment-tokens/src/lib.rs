pub mod amount;
pub mod chain;
pub mod config;
pub mod error;
pub mod registry;
pub mod token;

// Re-exports for convenience
pub use amount::{format_amount, parse_amount};
pub use chain::{ChainDescriptor, BASE, DEFAULT_CHAIN_ID, ETHEREUM, POLYGON};
pub use config::RegistryConfig;
pub use error::{AmountError, Error, RegistryError};
pub use registry::Registry;
pub use token::{TokenDescriptor, TokenSource};

/// Render a base-unit amount of a registered token.
///
/// Unknown tokens render as `None` so the caller can decide how to show
/// an amount whose decimals are not known.
pub fn format_token_amount(
    tokens: &dyn TokenSource,
    chain_id: u64,
    address: &str,
    raw: Option<&str>,
) -> Option<String> {
    let token = tokens.lookup(chain_id, address)?;
    let amount = format_amount(raw, token.decimals);
    Some(format!("{amount} {}", token.symbol))
}

/// Convert a user-entered amount of a registered token into base units.
pub fn parse_token_amount(
    tokens: &dyn TokenSource,
    chain_id: u64,
    address: &str,
    text: &str,
) -> Result<String, Error> {
    let token = tokens
        .lookup(chain_id, address)
        .ok_or_else(|| Error::UnknownToken {
            chain_id,
            address: address.to_string(),
        })?;
    Ok(parse_amount(text, token.decimals)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::EmptyTokenSource;

    #[test]
    fn test_format_token_amount() {
        let registry = Registry::default();
        let usdc = registry.default_token().clone();

        let result = format_token_amount(&registry, usdc.chain_id, &usdc.address, Some("2500000"));
        assert_eq!(result.as_deref(), Some("2.5 USDC"));

        let result = format_token_amount(&registry, usdc.chain_id, &usdc.address, None);
        assert_eq!(result.as_deref(), Some("0 USDC"));

        assert!(format_token_amount(&EmptyTokenSource, BASE, &usdc.address, Some("1")).is_none());
    }

    #[test]
    fn test_parse_token_amount() {
        let registry = Registry::default();
        let usdt = registry
            .token_by_address(ETHEREUM, "0xdac17f958d2ee523a2206206994597c13d831ec7")
            .unwrap()
            .clone();

        assert_eq!(
            parse_token_amount(&registry, ETHEREUM, &usdt.address, "10.25").unwrap(),
            "10250000"
        );

        let err = parse_token_amount(&registry, ETHEREUM, &usdt.address, "ten").unwrap_err();
        assert!(matches!(err, Error::Amount(AmountError::InvalidDigits { .. })));

        let err = parse_token_amount(&registry, POLYGON, &usdt.address, "1").unwrap_err();
        assert!(matches!(err, Error::UnknownToken { chain_id: POLYGON, .. }));
    }

    #[test]
    fn test_round_trip_through_registry_decimals() {
        let registry = Registry::default();
        for token in registry.all_tokens() {
            let raw = parse_amount("1234.5678", token.decimals).unwrap();
            assert_eq!(format_amount(Some(&raw), token.decimals), "1234.5678");
        }
    }
}
