//! # Cosmzone tax
//!
//! A protocol-level **tax** is withheld from every transaction fee, and the
//! node's mempool only admits transactions whose fee, **after** that tax,
//! still clears the locally configured minimum gas prices.
//!
//! * [`params`]: the governance-controlled [`TaxRate`] (percent, `[0, 100]`).
//! * [`keeper`]: height-versioned parameter storage behind [`ParamStore`].
//! * [`calculator`]: the pure tax split, truncating toward zero.
//! * [`decorator`]: the [`MempoolFeeDecorator`] ante stage.
//!
//! ## Quick start
//!
//! ```rust
//! use cosmzone_tax::{calculator::apply_fee, TaxRate};
//!
//! let rate = TaxRate::from_percent(10).unwrap();
//! let split = apply_fee(&rate, &"1000uatom".parse().unwrap()).unwrap();
//! assert_eq!(split.tax.to_string(), "100uatom");
//! assert_eq!(split.remaining.to_string(), "900uatom");
//! ```

pub mod calculator;
pub mod decorator;
pub mod error;
pub mod keeper;
pub mod params;


// Re-exports for convenience.
pub use {
    calculator::FeeSplit,
    decorator::MempoolFeeDecorator,
    error::TaxError,
    keeper::{Keeper, ParamStore},
    params::{TaxParams, TaxRate},
};
