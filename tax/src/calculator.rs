use {
    crate::{error::TaxError, params::TaxRate},
    cosmzone_coins::{Coin, Coins},
    serde::{Deserialize, Serialize},
};

/// Breakdown of an attached fee into the protocol tax and what is left for
/// the validator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    /// `floor(amount × rate / 100)` per denomination.
    pub tax: Coins,
    /// `fee − tax`, per denomination.
    pub remaining: Coins,
}

/// Deduct the protocol tax from every denomination of `fee_coins`.
///
/// # Formula
///
/// ```text
/// tax[d]       = floor(fee[d] × rate / 100)
/// remaining[d] = fee[d] − tax[d]
/// ```
///
/// A zero rate passes the whole fee through untouched and an empty fee yields
/// two empty sets. Truncation keeps `tax[d] <= fee[d]`, but the subtraction
/// is still checked: a negative remainder is reported as
/// [`TaxError::InsufficientFee`] rather than represented.
pub fn apply_fee(fee_rate: &TaxRate, fee_coins: &Coins) -> Result<FeeSplit, TaxError> {
    if fee_rate.is_zero() {
        return Ok(FeeSplit {
            tax: Coins::default(),
            remaining: fee_coins.clone(),
        });
    }

    if fee_coins.is_empty() {
        return Ok(FeeSplit::default());
    }

    let tax: Coins = fee_coins
        .iter()
        .map(|fee| Coin::new(fee.denom.clone(), fee_rate.portion_of(&fee.amount)))
        .collect();

    let remaining = fee_coins
        .checked_sub(&tax)
        .ok_or_else(|| TaxError::InsufficientFee {
            got: fee_coins.clone(),
            required: tax.clone(),
        })?;

    Ok(FeeSplit { tax, remaining })
}
