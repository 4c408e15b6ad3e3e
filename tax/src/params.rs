use {
    crate::error::TaxError,
    borsh::{BorshDeserialize, BorshSerialize},
    cosmzone_coins::Dec,
    num_bigint::BigUint,
    serde::{Deserialize, Serialize},
};

/// Upper bound of [`TaxRate`], in percent.
pub const MAX_FEE_RATE_PERCENT: u64 = 100;

/// Percentage of every attached fee withheld as protocol tax.
///
/// Always within `[0, 100]`; zero means no tax policy is active. The value is
/// an exact decimal so fractional rates such as `0.5` are representable.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
#[serde(try_from = "Dec", into = "Dec")]
pub struct TaxRate(Dec);

impl TaxRate {
    pub fn new(percent: Dec) -> Result<Self, TaxError> {
        if percent > Dec::from_int(MAX_FEE_RATE_PERCENT) {
            return Err(TaxError::InvalidFeeRate(percent));
        }
        Ok(Self(percent))
    }

    pub fn from_percent(percent: u64) -> Result<Self, TaxError> {
        Self::new(Dec::from_int(percent))
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn percent(&self) -> &Dec {
        &self.0
    }

    /// `floor(amount × rate / 100)`, computed exactly.
    ///
    /// Never exceeds `amount` because the rate is at most 100.
    pub fn portion_of(&self, amount: &BigUint) -> BigUint {
        let hundred = Dec::from_int(MAX_FEE_RATE_PERCENT);
        (amount * self.0.raw()) / hundred.raw()
    }
}

impl TryFrom<Dec> for TaxRate {
    type Error = TaxError;

    fn try_from(percent: Dec) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<TaxRate> for Dec {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

/// Governance-controlled parameters of the tax module.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct TaxParams {
    pub fee_rate: TaxRate,
}

impl TaxParams {
    pub fn new(fee_rate: TaxRate) -> Self {
        Self { fee_rate }
    }

    /// Re-check invariants on values that bypassed the constructors, such as
    /// params decoded from storage.
    pub fn validate(&self) -> Result<(), TaxError> {
        TaxRate::new(self.fee_rate.percent().clone()).map(|_| ())
    }
}
