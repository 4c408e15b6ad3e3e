//! Property-based tests for the mempool fee admission decision.
//!
//! Properties tested:
//! 1. Outside pool admission every transaction is forwarded
//! 2. An empty or all-zero price policy forwards every fee-carrying tx
//! 3. Required fees are ceil(price × gas): never below the exact product and
//!    less than one unit above it
//! 4. Rejections report got == fee and required == requirement + tax

#[cfg(test)]
mod tests {
    use {
        cosmzone_ante::{AnteError, ExecMode, Msg, StdFee, StdTx},
        cosmzone_coins::{Coin, Coins, Dec, DecCoin, DecCoins},
        cosmzone_tax::{
            calculator::apply_fee,
            decorator::{admit, required_fees},
            TaxParams, TaxRate,
        },
        num_bigint::BigUint,
        proptest::prelude::*,
    };

    fn tx(fee: Coins, gas: u64) -> StdTx {
        StdTx::new(
            vec![Msg::new("/cosmos.bank.v1beta1.MsgSend", vec![])],
            StdFee::new(fee, gas),
            "",
        )
    }

    fn params(percent: u64) -> TaxParams {
        TaxParams::new(TaxRate::from_percent(percent).unwrap())
    }

    fn uatom(amount: u64) -> Coins {
        Coin::new("uatom", amount).into()
    }

    /// A single-denomination price of `micro` millionths per gas unit.
    fn price(micro: u64) -> DecCoins {
        DecCoins::new([DecCoin::new("uatom", Dec::with_prec(micro, 6).unwrap())]).unwrap()
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Mode bypass
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #[test]
        fn non_admission_modes_always_forward(
            fee in 0..1_000_000u64,
            gas in 0..10_000_000u64,
            micro in 0..1_000_000_000u64,
            percent in 0..=100u64,
        ) {
            let tx = tx(uatom(fee), gas);
            for mode in [ExecMode::Inclusion, ExecMode::Simulation] {
                prop_assert!(admit(&tx, mode, &price(micro), &params(percent)).is_ok());
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Empty policy
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #[test]
        fn empty_policy_always_forwards(
            fee in 0..1_000_000u64,
            gas in 0..10_000_000u64,
            percent in 0..=100u64,
        ) {
            let tx = tx(uatom(fee), gas);
            prop_assert!(admit(&tx, ExecMode::PoolAdmission, &DecCoins::default(), &params(percent)).is_ok());
            prop_assert!(admit(&tx, ExecMode::PoolAdmission, &price(0), &params(percent)).is_ok());
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Requirement rounding
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn required_fee_is_ceiling_of_product(
            micro in 1..1_000_000_000u64,
            gas in 0..100_000_000u64,
        ) {
            let required = required_fees(&price(micro), gas).amount_of("uatom");
            // Exact product, scaled by 10^6.
            let scaled = BigUint::from(micro) * BigUint::from(gas);
            let million = BigUint::from(1_000_000u32);

            prop_assert!(&required * &million >= scaled);
            if required > BigUint::from(0u32) {
                prop_assert!((&required - BigUint::from(1u32)) * &million < scaled);
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Decision and diagnostic
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn admission_matches_remaining_vs_required(
            fee in 1..10_000_000u64,
            gas in 1..1_000_000u64,
            micro in 1..100_000u64,
            percent in 0..=100u64,
        ) {
            let fee = uatom(fee);
            let policy = price(micro);
            let params = params(percent);
            let split = apply_fee(&params.fee_rate, &fee).unwrap();
            let required = required_fees(&policy, gas);

            match admit(&tx(fee.clone(), gas), ExecMode::PoolAdmission, &policy, &params) {
                Ok(()) => {
                    prop_assert!(split.remaining.amount_of("uatom") >= required.amount_of("uatom"));
                }
                Err(AnteError::InsufficientFee { got, required: reported }) => {
                    prop_assert!(split.remaining.amount_of("uatom") < required.amount_of("uatom"));
                    prop_assert_eq!(got, fee);
                    prop_assert_eq!(reported, required.add(&split.tax));
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }
    }
}
