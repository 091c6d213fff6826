//! Threshold secret sharing with homomorphic aggregation.
//!
//! Each dealer [`split`]s a secret into one [`Share`] per participant.
//! Participants add up what they receive ([`aggregate_for_party`], or
//! [`combine_homomorphically`] for whole share sets) and any `threshold` of
//! the summed shares [`reconstruct`] the sum of all secrets, without any
//! individual secret being revealed.

pub mod aggregate;
pub mod error;
pub mod params;
pub mod points;
pub mod randomness;
pub mod refresh;
pub mod shamir;
pub mod share;

pub use aggregate::{aggregate_for_party, combine_homomorphically};
pub use error::{Result, ShamirError};
pub use params::{DemoField, ThresholdConfig, DEMO_MODULUS};
pub use points::EvaluationPoints;
pub use randomness::{FieldSampler, ScriptedSource};
pub use refresh::refresh;
pub use shamir::{reconstruct, split, ShamirSSS};
pub use share::{Share, ShareSet};
