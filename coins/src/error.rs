use thiserror::Error;

/// Errors produced while building or parsing coin amounts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoinError {
    /// Denominations must match `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
    #[error("invalid denom: {0:?}")]
    InvalidDenom(String),

    /// The expression is not of the form `<amount><denom>`.
    #[error("invalid coin expression: {0:?}")]
    InvalidCoin(String),

    /// The string is not a non-negative decimal number.
    #[error("invalid decimal string: {0:?}")]
    InvalidDecimal(String),

    #[error("decimal {value:?} has more than {max} fractional digits")]
    PrecisionTooHigh { value: String, max: u32 },

    /// A strict constructor received the same denomination twice.
    #[error("duplicate denomination: {0}")]
    DuplicateDenom(String),
}
