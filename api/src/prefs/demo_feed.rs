use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::chain::BlockNumber;
use crate::gas_price::GasPrice;

/// Settings for the built-in demo feed, which publishes synthetic chain
/// status in place of a host application's data sources.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DemoFeed {
    /// The first block number published.
    pub start_block: BlockNumber,

    /// The gas price published alongside every block.
    pub gas_price: GasPrice,

    /// Seconds between synthetic blocks. Never zero.
    block_interval_secs: u64,
}

impl DemoFeed {
    /// Mainnet-like cadence.
    pub const DEFAULT_BLOCK_INTERVAL_SECS: u64 = 12;

    pub fn new(start_block: BlockNumber, gas_price: GasPrice, block_interval_secs: u64) -> Self {
        Self {
            start_block,
            gas_price,
            block_interval_secs: block_interval_secs.max(1),
        }
    }

    pub fn block_interval(&self) -> Duration {
        Duration::from_secs(self.block_interval_secs)
    }
}

impl Default for DemoFeed {
    fn default() -> Self {
        Self::new(
            BlockNumber::default(),
            GasPrice::from_gwei(30),
            Self::DEFAULT_BLOCK_INTERVAL_SECS,
        )
    }
}
