//! # Cosmzone ante chain
//!
//! Transactions are screened by an ordered chain of [`AnteDecorator`]s before
//! they are admitted to the mempool or executed in a block. Each decorator
//! receives the [`Context`], the transaction, the `simulate` flag and a
//! [`Next`] continuation; it either returns an [`AnteError`], which aborts the
//! remaining stages, or forwards to `next`.
//!
//! ```rust
//! use cosmzone_ante::{AnteHandler, Context, Msg, StdFee, StdTx, ValidateBasicDecorator};
//!
//! let handler = AnteHandler::new(vec![Box::new(ValidateBasicDecorator)]);
//! let tx = StdTx::new(
//!     vec![Msg::new("/cosmos.bank.v1beta1.MsgSend", vec![])],
//!     StdFee::default(),
//!     "",
//! );
//! let ctx = Context::new("cosmzone-1", 1).with_check_tx(true);
//! assert!(handler.handle(ctx, &tx, false).is_ok());
//! ```

pub mod context;
pub mod decorator;
pub mod error;
pub mod tx;

#[cfg(test)]
mod tests;

pub use {
    context::{Context, ExecMode},
    decorator::{AnteDecorator, AnteHandler, Next, ValidateBasicDecorator},
    error::{AnteError, AnteResult},
    tx::{FeeTx, Msg, StdFee, StdTx, Tx},
};
