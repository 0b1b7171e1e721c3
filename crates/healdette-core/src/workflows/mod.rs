//! # Workflows Module
//!
//! Complete validation procedures built from the `core` and `engine` layers.
//!
//! - [`validate`] - The [`validate::WeightedSequenceValidator`] orchestrator for single sequences
//! - [`batch`] - Order-preserving validation of many sequences on a bounded worker pool

pub mod batch;
pub mod validate;
