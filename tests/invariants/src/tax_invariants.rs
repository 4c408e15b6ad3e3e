//! Property-based tests for the tax split.
//!
//! Properties tested:
//! 1. Truncation: tax[d] == floor(fee[d] × rate / 100) and tax[d] <= fee[d]
//! 2. Conservation: tax + remaining == fee, denomination-wise
//! 3. Zero rate is the identity
//! 4. Tax is monotone in the rate

#[cfg(test)]
mod tests {
    use {
        cosmzone_coins::{Coin, Coins, Dec},
        cosmzone_tax::{calculator::apply_fee, TaxRate},
        num_bigint::BigUint,
        proptest::prelude::*,
    };

    const DENOMS: [&str; 3] = ["stake", "uatom", "unls"];

    /// Rates in hundredths of a percent, 0.00% ..= 100.00%.
    fn rate(hundredths: u64) -> TaxRate {
        TaxRate::new(Dec::with_prec(hundredths, 2).unwrap()).unwrap()
    }

    fn fee_strategy() -> impl Strategy<Value = Coins> {
        proptest::collection::vec((0..DENOMS.len(), any::<u128>()), 0..6).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(idx, amount)| Coin::new(DENOMS[idx], amount))
                .collect()
        })
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1 + 2. Truncation and conservation
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn tax_truncates_and_conserves(fee in fee_strategy(), hundredths in 0..=10_000u64) {
            let split = apply_fee(&rate(hundredths), &fee).unwrap();

            for coin in fee.iter() {
                let expected = &coin.amount * BigUint::from(hundredths) / BigUint::from(10_000u32);
                let tax = split.tax.amount_of(&coin.denom);
                prop_assert_eq!(&tax, &expected, "tax on {}", coin);
                prop_assert!(tax <= coin.amount);
                prop_assert_eq!(
                    split.remaining.amount_of(&coin.denom) + tax,
                    coin.amount.clone()
                );
            }

            // Nothing appears that was not paid.
            prop_assert_eq!(split.tax.add(&split.remaining), fee);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Zero rate
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #[test]
        fn zero_rate_is_identity(fee in fee_strategy()) {
            let split = apply_fee(&TaxRate::zero(), &fee).unwrap();
            prop_assert!(split.tax.is_empty());
            prop_assert_eq!(split.remaining, fee);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Monotonicity
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #[test]
        fn higher_rate_never_taxes_less(
            fee in fee_strategy(),
            low in 0..=10_000u64,
            bump in 0..=10_000u64,
        ) {
            let high = (low + bump).min(10_000);
            let low_split = apply_fee(&rate(low), &fee).unwrap();
            let high_split = apply_fee(&rate(high), &fee).unwrap();
            for denom in fee.denoms() {
                prop_assert!(low_split.tax.amount_of(denom) <= high_split.tax.amount_of(denom));
            }
        }
    }

    #[test]
    fn full_rate_takes_everything() {
        let fee: Coins = "1000uatom,7stake".parse().unwrap();
        let split = apply_fee(&rate(10_000), &fee).unwrap();
        assert_eq!(split.tax, fee);
        assert!(split.remaining.is_empty());
    }
}
