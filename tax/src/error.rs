use {
    crate::params::MAX_FEE_RATE_PERCENT,
    cosmzone_ante::AnteError,
    cosmzone_coins::{Coins, Dec},
    thiserror::Error,
};

/// Errors produced by the tax module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxError {
    /// Governance tried to set a rate outside `[0, 100]` percent.
    #[error("fee rate must be within [0, {max}] percent, got {0}", max = MAX_FEE_RATE_PERCENT)]
    InvalidFeeRate(Dec),

    /// Deducting the tax would leave a negative component.
    #[error("tax exceeds the attached fee; got: {got} required: {required}")]
    InsufficientFee { got: Coins, required: Coins },

    /// Nothing was recorded at or below the requested height.
    #[error("no tax params recorded at or below height {height}")]
    ParamsNotFound { height: u64 },

    /// Params below the newest recorded height are already committed.
    #[error("tax params at height {height} are committed; newest entry is at {latest}")]
    ParamsHeightCommitted { height: u64, latest: u64 },

    /// Stored params could not be encoded or decoded.
    #[error("tax params codec error: {0}")]
    ParamsCodec(String),
}

impl From<TaxError> for AnteError {
    fn from(err: TaxError) -> Self {
        match err {
            TaxError::InsufficientFee { got, required } => {
                AnteError::InsufficientFee { got, required }
            }
            other => AnteError::Internal(other.to_string()),
        }
    }
}
