//! Cosmzone Property-Based Invariant Tests
//!
//! Uses proptest to verify the fee admission pipeline's invariants:
//! - Tax arithmetic: truncation, conservation, zero-rate identity
//! - Admission: mode bypass, empty-policy bypass, rounded-up requirements

pub mod admission_invariants;
pub mod tax_invariants;
