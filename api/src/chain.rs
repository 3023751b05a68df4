//! Identifiers for the active network and its blocks.

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use serde::Deserialize;
use serde::Serialize;

use crate::quantity::biguint_quantity;

/// An EVM chain id, as reported by the connected wallet or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const MAINNET: Self = Self(1);
    pub const ROPSTEN: Self = Self(3);
    pub const RINKEBY: Self = Self(4);
    pub const GOERLI: Self = Self(5);
    pub const OPTIMISM: Self = Self(10);
    pub const KOVAN: Self = Self(42);
    pub const OPTIMISTIC_KOVAN: Self = Self(69);
    pub const ARBITRUM_ONE: Self = Self(42161);
    pub const ARBITRUM_RINKEBY: Self = Self(421611);
}

impl Default for ChainId {
    fn default() -> Self {
        Self::MAINNET
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The height of a block.
///
/// Stored as an arbitrary-precision integer so that no chain is ever too
/// tall to display exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockNumber(BigUint);

biguint_quantity!(BlockNumber);

impl BlockNumber {
    /// Returns the height of the following block.
    pub fn next(&self) -> Self {
        Self(&self.0 + BigUint::one())
    }
}

impl From<u64> for BlockNumber {
    fn from(height: u64) -> Self {
        Self(BigUint::from(height))
    }
}

impl From<BigUint> for BlockNumber {
    fn from(height: BigUint) -> Self {
        Self(height)
    }
}
