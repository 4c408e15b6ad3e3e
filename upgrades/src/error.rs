use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error("invalid upgrade plan: {0}")]
    InvalidPlan(String),

    #[error("upgrade {name} cannot be scheduled at height {height}: chain is already at {current}")]
    PlanInPast {
        name: String,
        height: u64,
        current: u64,
    },

    #[error("upgrade {name} was already applied at height {height}")]
    AlreadyApplied { name: String, height: u64 },

    #[error("no upgrade handler registered for {0}")]
    NoHandler(String),

    /// The plan's height was reached but this binary cannot perform it.
    #[error("UPGRADE \"{name}\" NEEDED at height: {height}")]
    UpgradeNeeded { name: String, height: u64 },

    /// This binary already carries the handler for a plan that is not due.
    #[error("BINARY UPDATED BEFORE TRIGGER! UPGRADE \"{name}\" - in binary but not executed on chain")]
    BinaryUpdatedBeforeTrigger { name: String },

    /// Returned by a handler body that could not migrate.
    #[error("upgrade handler {name} failed: {reason}")]
    HandlerFailed { name: String, reason: String },

    #[error("upgrade info I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("upgrade info is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
