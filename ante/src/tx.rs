use {
    crate::error::{AnteError, AnteResult},
    cosmzone_coins::Coins,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Maximum memo length, in bytes.
pub const MAX_MEMO_CHARACTERS: usize = 256;

/// Largest gas limit a transaction may declare.
pub const MAX_GAS_WANTED: u64 = (1 << 63) - 1;

/// Capability of transactions that carry a fee and a gas limit.
pub trait FeeTx {
    fn fee(&self) -> &Coins;
    fn gas(&self) -> u64;
}

/// A transaction as seen by the ante chain.
pub trait Tx: fmt::Debug + Send + Sync {
    /// Stateless sanity checks.
    fn validate_basic(&self) -> AnteResult<()> {
        Ok(())
    }

    /// The fee capability, if this transaction type has one.
    fn fee_tx(&self) -> Option<&dyn FeeTx> {
        None
    }
}

/// An opaque message; only the ante chain's view of it is modelled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msg {
    pub type_url: String,
    pub value: Vec<u8>,
}

impl Msg {
    pub fn new(type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Coins,
    pub gas: u64,
}

impl StdFee {
    pub fn new(amount: Coins, gas: u64) -> Self {
        Self { amount, gas }
    }
}

/// The standard signed-transaction envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdTx {
    pub msgs: Vec<Msg>,
    pub fee: StdFee,
    pub memo: String,
}

impl StdTx {
    pub fn new(msgs: Vec<Msg>, fee: StdFee, memo: impl Into<String>) -> Self {
        Self {
            msgs,
            fee,
            memo: memo.into(),
        }
    }
}

impl FeeTx for StdTx {
    fn fee(&self) -> &Coins {
        &self.fee.amount
    }

    fn gas(&self) -> u64 {
        self.fee.gas
    }
}

impl Tx for StdTx {
    fn validate_basic(&self) -> AnteResult<()> {
        if self.msgs.is_empty() {
            return Err(AnteError::InvalidRequest(
                "must contain at least one message".to_string(),
            ));
        }
        if self.memo.len() > MAX_MEMO_CHARACTERS {
            return Err(AnteError::InvalidRequest(format!(
                "memo is {} bytes, maximum is {MAX_MEMO_CHARACTERS}",
                self.memo.len()
            )));
        }
        if self.fee.gas > MAX_GAS_WANTED {
            return Err(AnteError::InvalidRequest(format!(
                "invalid gas supplied; {} > {MAX_GAS_WANTED}",
                self.fee.gas
            )));
        }
        Ok(())
    }

    fn fee_tx(&self) -> Option<&dyn FeeTx> {
        Some(self)
    }
}
