use std::env;

use serde::Deserialize;
use serde::Serialize;

use super::demo_feed::DemoFeed;
use super::parse_flag;
use crate::chain::ChainId;

/// Everything the status bar needs to know about its deployment.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StatusPrefs {
    chain_id: ChainId,
    demo_feed: Option<DemoFeed>,
}

impl StatusPrefs {
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Present only when the demo feed is switched on.
    pub fn demo_feed(&self) -> Option<&DemoFeed> {
        self.demo_feed.as_ref()
    }

    /// Creates a StatusPrefs instance from environment variables.
    ///
    /// # Environment Variables
    /// - `CHAIN_ID`: decimal chain id. defaults to 1 (mainnet).
    /// - `DEMO_FEED`: "true" or "1" publishes synthetic blocks. defaults to off.
    /// - `DEMO_START_BLOCK`: first synthetic block, decimal or 0x-hex.
    /// - `DEMO_GAS_PRICE`: synthetic gas price in wei, decimal or 0x-hex.
    /// - `DEMO_BLOCK_INTERVAL_SECS`: seconds between synthetic blocks.
    ///
    /// Unset or malformed values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let chain_id = var("CHAIN_ID")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(ChainId)
            .unwrap_or_default();

        let demo_enabled = var("DEMO_FEED").map(|v| parse_flag(&v)).unwrap_or(false);

        let demo_feed = demo_enabled.then(|| {
            let defaults = DemoFeed::default();
            let start_block = var("DEMO_START_BLOCK")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.start_block);
            let gas_price = var("DEMO_GAS_PRICE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.gas_price);
            let interval = var("DEMO_BLOCK_INTERVAL_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DemoFeed::DEFAULT_BLOCK_INTERVAL_SECS);
            DemoFeed::new(start_block, gas_price, interval)
        });

        Self {
            chain_id,
            demo_feed,
        }
    }
}

impl Default for StatusPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
