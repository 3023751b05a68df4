//! What the status bar shows, derived from the current chain status.

use api::chain::BlockNumber;
use api::chain::ChainId;
use api::explorer::explorer_link;
use api::explorer::ExplorerDataType;
use api::gas_price::GasPrice;
use api::gas_price::Gwei;

/// Colour state of the status bar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum Tone {
    #[default]
    Normal,
    /// Never produced in this configuration. The bar has no stale-data check yet.
    Warning,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Normal => "var(--polling-green)",
            Tone::Warning => "var(--polling-yellow)",
        }
    }
}

/// The connectivity warning next to the bar is switched off.
pub const SHOW_CONNECTIVITY_WARNING: bool = false;

/// Number opacity while the pointer is over the bar.
pub const HOVER_OPACITY: f32 = 0.7;
/// Number opacity during the freshness window.
pub const BREATHE_OPACITY: f32 = 1.0;
/// Number opacity at rest.
pub const IDLE_OPACITY: f32 = 0.5;

/// Opacity of the block number. Hover wins over the freshness pulse.
pub fn number_opacity(breathe: bool, hovering: bool) -> f32 {
    if hovering {
        HOVER_OPACITY
    } else if breathe {
        BREATHE_OPACITY
    } else {
        IDLE_OPACITY
    }
}

/// Display values for one render of the status bar.
#[derive(Clone, PartialEq, Debug)]
pub struct StatusReadout {
    /// `None` hides the gas readout entirely.
    pub gas_gwei: Option<Gwei>,
    /// The block number, or empty while unknown.
    pub block_label: String,
    /// Explorer page for the block, or empty while chain or block is unknown.
    pub explorer_href: String,
    pub tone: Tone,
}

impl StatusReadout {
    pub fn new(
        chain_id: Option<ChainId>,
        block_number: Option<&BlockNumber>,
        gas_price: Option<&GasPrice>,
    ) -> Self {
        let explorer_href = match (chain_id, block_number) {
            (Some(chain_id), Some(block)) => {
                explorer_link(chain_id, &block.to_string(), ExplorerDataType::Block)
            }
            _ => String::new(),
        };

        Self {
            gas_gwei: gas_price.map(GasPrice::to_gwei),
            block_label: block_number.map(ToString::to_string).unwrap_or_default(),
            explorer_href,
            tone: Tone::default(),
        }
    }
}
