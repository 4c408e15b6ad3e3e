use {
    crate::{
        calculator::{apply_fee, FeeSplit},
        keeper::ParamStore,
        params::TaxParams,
    },
    cosmzone_ante::{AnteDecorator, AnteError, AnteResult, Context, ExecMode, Next, Tx},
    cosmzone_coins::{Coin, Coins, DecCoins},
    log::{debug, info},
    num_bigint::BigUint,
};

/// Checks that a transaction's fee, after the protocol tax is deducted, still
/// clears the node's local minimum gas prices.
///
/// This is a local mempool gate, not a consensus rule: it only acts while the
/// node is deciding whether to hold a transaction (`CheckTx` without
/// simulation). Blocks and dry runs pass straight through, so validators may
/// run different local policies without disagreeing on block validity.
///
/// The decorator only reads; it never moves funds or alters the transaction.
pub struct MempoolFeeDecorator<P> {
    params: P,
}

impl<P: ParamStore> MempoolFeeDecorator<P> {
    pub fn new(params: P) -> Self {
        Self { params }
    }
}

impl<P: ParamStore> AnteDecorator for MempoolFeeDecorator<P> {
    fn ante_handle(
        &self,
        ctx: Context,
        tx: &dyn Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> AnteResult<Context> {
        let mode = ctx.exec_mode(simulate);
        if mode == ExecMode::PoolAdmission {
            let params = self.params.params(&ctx)?;
            admit(tx, mode, ctx.min_gas_prices(), &params)?;
        }
        next.run(ctx, tx, simulate)
    }
}

/// The admission decision on its own, with every input passed explicitly.
///
/// `Ok(())` means forward to the next stage.
pub fn admit(
    tx: &dyn Tx,
    mode: ExecMode,
    min_gas_prices: &DecCoins,
    params: &TaxParams,
) -> AnteResult<()> {
    if mode != ExecMode::PoolAdmission {
        return Ok(());
    }

    let fee_tx = tx
        .fee_tx()
        .ok_or_else(|| AnteError::TxDecode("Tx must be a FeeTx".to_string()))?;
    let gas = fee_tx.gas();
    info!("Mempool: gas {gas}");

    let FeeSplit { tax, remaining } = apply_fee(&params.fee_rate, fee_tx.fee())?;

    if min_gas_prices.is_zero() {
        return Ok(());
    }

    let required = required_fees(min_gas_prices, gas);
    // The remainder needs to cover the requirement in a single denomination
    // only, matching the host's fee comparison.
    if !remaining.is_any_gte(&required) {
        let err = AnteError::InsufficientFee {
            got: remaining.add(&tax),
            required: required.add(&tax),
        };
        debug!("mempool fee check failed: {err}");
        return Err(err);
    }

    Ok(())
}

/// `ceil(price × gas)` for every configured minimum gas price.
///
/// This is a floor the payer has to clear, hence rounding up; the tax itself
/// rounds down.
pub fn required_fees(min_gas_prices: &DecCoins, gas: u64) -> Coins {
    let gas = BigUint::from(gas);
    min_gas_prices
        .iter()
        .map(|price| Coin::new(price.denom.clone(), price.amount.mul_int(&gas).ceil_int()))
        .collect()
}
