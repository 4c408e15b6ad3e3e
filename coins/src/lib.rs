//! # Cosmzone coins
//!
//! Exact, multi-denomination amounts for fee handling.
//!
//! * [`Coin`] / [`Coins`] hold **integer** amounts in base units (for example
//!   `uatom`), backed by arbitrary-precision integers.
//! * [`Dec`] / [`DecCoin`] / [`DecCoins`] hold **fixed-point decimals** with
//!   18 fractional digits and are used for per-gas prices and rates.
//!
//! Every set type is canonical: sorted by denomination, no duplicates and no
//! zero-valued entries. Nothing here uses binary floating point, so every
//! node computes bit-identical results.
//!
//! ```rust
//! use cosmzone_coins::{Coins, DecCoins};
//!
//! let fee: Coins = "1000uatom,5stake".parse().unwrap();
//! let tax: Coins = "100uatom".parse().unwrap();
//! let remaining = fee.checked_sub(&tax).unwrap();
//! assert_eq!(remaining.to_string(), "5stake,900uatom");
//!
//! let min_gas_prices: DecCoins = "0.0001uatom".parse().unwrap();
//! assert!(!min_gas_prices.is_zero());
//! ```

pub mod coin;
pub mod coins;
pub mod dec;
pub mod error;


// Re-exports for convenience.
pub use {
    coin::{validate_denom, Coin, DecCoin},
    coins::{Coins, DecCoins},
    dec::Dec,
    error::CoinError,
};
