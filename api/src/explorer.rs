//! Builds links to third-party block explorers.

use crate::chain::ChainId;

/// The kind of object an explorer link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
pub enum ExplorerDataType {
    #[strum(serialize = "tx")]
    Transaction,
    #[strum(serialize = "token")]
    Token,
    #[strum(serialize = "address")]
    Address,
    #[strum(serialize = "block")]
    Block,
}

/// Gas tracker page linked from the gas price readout.
pub const GAS_TRACKER_URL: &str = "https://etherscan.io/gastracker";

/// Returns the etherscan subdomain prefix for a chain, falling back to mainnet.
fn etherscan_prefix(chain_id: ChainId) -> &'static str {
    match chain_id {
        ChainId::ROPSTEN => "ropsten.",
        ChainId::RINKEBY => "rinkeby.",
        ChainId::GOERLI => "goerli.",
        ChainId::KOVAN => "kovan.",
        ChainId::OPTIMISM => "optimistic.",
        ChainId::OPTIMISTIC_KOVAN => "kovan-optimistic.",
        _ => "",
    }
}

/// Returns the explorer URL for `data` (a hash, address or block number) on `chain_id`.
pub fn explorer_link(chain_id: ChainId, data: &str, kind: ExplorerDataType) -> String {
    let segment = kind.as_ref();
    match chain_id {
        ChainId::ARBITRUM_ONE => format!("https://arbiscan.io/{segment}/{data}"),
        ChainId::ARBITRUM_RINKEBY => {
            format!("https://rinkeby-explorer.arbitrum.io/{segment}/{data}")
        }
        _ => format!(
            "https://{}etherscan.io/{segment}/{data}",
            etherscan_prefix(chain_id)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_block_link() {
        assert_eq!(
            explorer_link(ChainId::MAINNET, "17034812", ExplorerDataType::Block),
            "https://etherscan.io/block/17034812"
        );
    }

    #[test]
    fn testnet_and_l2_prefixes() {
        assert_eq!(
            explorer_link(ChainId::GOERLI, "1", ExplorerDataType::Block),
            "https://goerli.etherscan.io/block/1"
        );
        assert_eq!(
            explorer_link(ChainId::OPTIMISTIC_KOVAN, "0xabc", ExplorerDataType::Transaction),
            "https://kovan-optimistic.etherscan.io/tx/0xabc"
        );
        assert_eq!(
            explorer_link(ChainId::ARBITRUM_ONE, "0xdef", ExplorerDataType::Address),
            "https://arbiscan.io/address/0xdef"
        );
        assert_eq!(
            explorer_link(ChainId::ARBITRUM_RINKEBY, "0x1", ExplorerDataType::Token),
            "https://rinkeby-explorer.arbitrum.io/token/0x1"
        );
    }

    #[test]
    fn unknown_chain_falls_back_to_mainnet() {
        assert_eq!(
            explorer_link(ChainId(8_453_000), "7", ExplorerDataType::Block),
            "https://etherscan.io/block/7"
        );
    }
}
