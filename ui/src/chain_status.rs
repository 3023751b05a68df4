//! Defines the reactive chain status consumed by the status bar.

use api::chain::BlockNumber;
use api::chain::ChainId;
use api::gas_price::GasPrice;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for live chain data.
///
/// The host application owns the data sources and writes into these
/// signals. Components that read them re-render on change and drop their
/// subscription when they unmount. `None` means "not known yet".
#[derive(Clone, Copy)]
pub struct ChainStatus {
    /// The active network.
    pub chain_id: Signal<Option<ChainId>>,
    /// The most recent block number seen on the active network.
    pub block_number: Signal<Option<BlockNumber>>,
    /// The current gas price in wei.
    pub gas_price: Signal<Option<GasPrice>>,
}

/// Creates chain status signals owned by the calling component and provides
/// them as context. Only the chain id is known up front.
pub fn use_chain_status_provider(chain_id: Option<ChainId>) -> ChainStatus {
    let chain_id = use_signal(move || chain_id);
    let block_number = use_signal(|| None);
    let gas_price = use_signal(|| None);

    use_context_provider(|| ChainStatus {
        chain_id,
        block_number,
        gas_price,
    })
}

pub fn use_chain_status() -> ChainStatus {
    use_context::<ChainStatus>()
}
