//! Gas price amounts and their conversion to gwei.

use num_bigint::BigUint;

use crate::quantity::biguint_quantity;

/// Number of wei in one gwei.
pub const WEI_PER_GWEI: u64 = 1_000_000_000;

/// A gas price denominated in wei, the smallest unit of the native currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GasPrice(BigUint);

biguint_quantity!(GasPrice);

impl GasPrice {
    pub fn from_wei(wei: BigUint) -> Self {
        Self(wei)
    }

    pub fn from_gwei(gwei: u64) -> Self {
        Self(BigUint::from(gwei) * WEI_PER_GWEI)
    }

    /// Converts to whole gwei, discarding any remainder.
    ///
    /// # Examples
    /// ```
    /// # use api::gas_price::GasPrice;
    /// let price: GasPrice = "42999999999".parse().unwrap();
    /// assert_eq!(price.to_gwei().to_string(), "42");
    /// ```
    pub fn to_gwei(&self) -> Gwei {
        Gwei(&self.0 / WEI_PER_GWEI)
    }
}

impl From<u64> for GasPrice {
    fn from(wei: u64) -> Self {
        Self(BigUint::from(wei))
    }
}

/// A whole number of gwei, as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gwei(BigUint);

biguint_quantity!(Gwei);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gwei_is_floor_of_wei() {
        let cases: [(u64, u64); 6] = [
            (0, 0),
            (1, 0),
            (999_999_999, 0),
            (1_000_000_000, 1),
            (1_999_999_999, 1),
            (87_123_456_789, 87),
        ];
        for (wei, gwei) in cases {
            assert_eq!(GasPrice::from(wei).to_gwei(), Gwei(BigUint::from(gwei)), "{wei} wei");
        }
    }

    #[test]
    fn gwei_conversion_is_exact_beyond_f64_precision() {
        // 2^70 + 1 wei, far past where a float would round.
        let wei = (BigUint::from(1u8) << 70) + 1u8;
        let expected = &wei / WEI_PER_GWEI;
        assert_eq!(GasPrice::from_wei(wei).to_gwei().to_string(), expected.to_string());
        assert_eq!(expected.to_string(), "1180591620717");
    }

    #[test]
    fn from_gwei_round_trips_through_to_gwei() {
        assert_eq!(GasPrice::from_gwei(30).to_string(), "30000000000");
        assert_eq!(GasPrice::from_gwei(30).to_gwei().to_string(), "30");
    }
}
