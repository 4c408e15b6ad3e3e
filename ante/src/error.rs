use {cosmzone_coins::Coins, thiserror::Error};

/// Reasons an ante handler refuses a transaction.
///
/// Every variant is terminal for the attempt: the remaining stages of the
/// chain are not run and nothing has been mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnteError {
    /// The transaction lacks a capability a stage requires, e.g. it does not
    /// carry a fee.
    #[error("tx parse error: {0}")]
    TxDecode(String),

    /// The attached fee does not clear the required minimum. Both amounts
    /// are what a resubmitting client has to reason about.
    #[error("insufficient fees; got: {got} required: {required}")]
    InsufficientFee { got: Coins, required: Coins },

    /// The transaction failed a stateless sanity check.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A collaborator (parameter store, etc.) failed while the stage ran.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type AnteResult<T> = Result<T, AnteError>;
