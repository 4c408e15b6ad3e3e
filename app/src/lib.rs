//! Cosmzone application wiring.
//!
//! [`App`] loads the node's [`AppConfig`], composes the ante chain
//! (`ValidateBasicDecorator` then `MempoolFeeDecorator`) once, and registers
//! the release upgrade handlers against the upgrade info found on disk.

mod app;
mod config;
mod error;

pub use {
    app::{module_versions, new_ante_handler, App},
    config::{AppConfig, DEFAULT_CONFIG_FILENAME},
    error::AppError,
};
