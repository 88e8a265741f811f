use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::chain::{fallback_chain_name, ChainDescriptor, BASE, ETHEREUM, POLYGON};
use crate::config::{resolve_address, RegistryConfig};
use crate::error::RegistryError;
use crate::token::{TokenDescriptor, TokenSource};

const ETHEREUM_USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
const ETHEREUM_USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
const POLYGON_USDC: &str = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";
const POLYGON_USDT: &str = "0xc2132D05D31c914a87C6611C10748AEb04B58e8F";
const BASE_USDC: &str = "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913";

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Chains and their tokens, in display order.
///
/// Built once and never mutated. The first chain is the default chain and
/// its first token is the default token.
#[derive(Debug, Clone)]
pub struct Registry {
    tokens: HashMap<u64, Vec<TokenDescriptor>>,
    chains: Vec<ChainDescriptor>,
}

impl Registry {
    /// Build the compiled-in table, applying address overrides from `config`.
    pub fn new(config: &RegistryConfig) -> Self {
        Self::assemble(default_chains(config))
    }

    /// Process-wide registry, built from the environment on first use.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| Registry::new(&RegistryConfig::from_env()))
    }

    /// Build a registry from a custom chain list, checking that it is
    /// internally consistent. The first chain becomes the default.
    pub fn from_chains(chains: Vec<ChainDescriptor>) -> Result<Self, RegistryError> {
        let first = chains.first().ok_or(RegistryError::NoChains)?;
        if first.tokens.is_empty() {
            return Err(RegistryError::EmptyDefaultChain { chain_id: first.id });
        }

        let mut seen = HashSet::new();
        for chain in &chains {
            if !seen.insert(chain.id) {
                return Err(RegistryError::DuplicateChain { chain_id: chain.id });
            }
            if let Some(token) = chain.tokens.iter().find(|t| t.chain_id != chain.id) {
                return Err(RegistryError::ChainMismatch {
                    symbol: token.symbol.clone(),
                    declared: token.chain_id,
                    listed: chain.id,
                });
            }
        }

        Ok(Self::assemble(chains))
    }

    fn assemble(chains: Vec<ChainDescriptor>) -> Self {
        let tokens = chains
            .iter()
            .map(|chain| (chain.id, chain.tokens.clone()))
            .collect();
        Self { tokens, chains }
    }

    /// Tokens registered for a chain, or an empty slice for unknown chains.
    pub fn tokens_for_chain(&self, chain_id: u64) -> &[TokenDescriptor] {
        self.tokens
            .get(&chain_id)
            .map(|tokens| tokens.as_slice())
            .unwrap_or(&[])
    }

    /// Find a token by contract address, ignoring hex casing.
    pub fn token_by_address(&self, chain_id: u64, address: &str) -> Option<&TokenDescriptor> {
        self.tokens_for_chain(chain_id)
            .iter()
            .find(|token| token.has_address(address))
    }

    pub fn chain(&self, chain_id: u64) -> Option<&ChainDescriptor> {
        self.chains.iter().find(|chain| chain.id == chain_id)
    }

    /// Display name of a chain, or `"Chain {id}"` if it is not registered.
    pub fn chain_name(&self, chain_id: u64) -> String {
        self.chain(chain_id)
            .map(|chain| chain.name.clone())
            .unwrap_or_else(|| fallback_chain_name(chain_id))
    }

    /// Chains in display order.
    pub fn chains(&self) -> &[ChainDescriptor] {
        &self.chains
    }

    /// Every registered token. Order across chains is unspecified.
    pub fn all_tokens(&self) -> Vec<&TokenDescriptor> {
        self.tokens.values().flatten().collect()
    }

    /// # Panics
    ///
    /// Panics if the default chain has no tokens. Registries built by
    /// [`Registry::new`] and [`Registry::from_chains`] never do.
    pub fn default_token(&self) -> &TokenDescriptor {
        &self.tokens_for_chain(self.default_chain().id)[0]
    }

    /// # Panics
    ///
    /// Panics on an empty chain list, which the constructors rule out.
    pub fn default_chain(&self) -> &ChainDescriptor {
        &self.chains[0]
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&RegistryConfig::default())
    }
}

impl TokenSource for Registry {
    fn lookup(&self, chain_id: u64, address: &str) -> Option<TokenDescriptor> {
        self.token_by_address(chain_id, address).cloned()
    }
}

/// The compiled-in chain table. Base comes first as the default chain.
fn default_chains(config: &RegistryConfig) -> Vec<ChainDescriptor> {
    let base_usdc = resolve_address(config.base_usdc_address.as_deref(), BASE_USDC);
    let ethereum_usdc = resolve_address(config.ethereum_usdc_address.as_deref(), ETHEREUM_USDC);
    let polygon_usdc = resolve_address(config.polygon_usdc_address.as_deref(), POLYGON_USDC);

    for (chain, address, fallback) in [
        ("base", &base_usdc, BASE_USDC),
        ("ethereum", &ethereum_usdc, ETHEREUM_USDC),
        ("polygon", &polygon_usdc, POLYGON_USDC),
    ] {
        if address != fallback {
            log::debug!("using configured {chain} USDC address {address}");
        }
    }

    vec![
        ChainDescriptor::new(
            BASE,
            "Base",
            vec![TokenDescriptor::new(base_usdc, "USDC", "USD Coin", 6, BASE)],
        ),
        ChainDescriptor::new(
            ETHEREUM,
            "Ethereum",
            vec![
                TokenDescriptor::new(ethereum_usdc, "USDC", "USD Coin", 6, ETHEREUM),
                TokenDescriptor::new(ETHEREUM_USDT, "USDT", "Tether USD", 6, ETHEREUM),
            ],
        ),
        ChainDescriptor::new(
            POLYGON,
            "Polygon",
            vec![
                TokenDescriptor::new(polygon_usdc, "USDC", "USD Coin (PoS)", 6, POLYGON),
                TokenDescriptor::new(POLYGON_USDT, "USDT", "Tether USD (PoS)", 6, POLYGON),
            ],
        ),
    ]
}
