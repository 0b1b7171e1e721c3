//! # Engine Module
//!
//! The scoring logic that turns sequence metrics and a population configuration into a verdict.
//!
//! ## Overview
//!
//! Each piece here is a small, pure building block. The blender folds population ranges into
//! ancestry-weighted targets, the motif scorer measures how many population binding motifs a
//! sequence carries, and the fitness functions measure how far metrics stray from declared
//! ranges. The [`workflows`](crate::workflows) layer composes them into complete runs.
//!
//! ## Architecture
//!
//! - **Blending** ([`blend`]) - Weighted-mean acceptance ranges and weight renormalization
//! - **Motif Scoring** ([`motif`]) - Overlapping two-residue window matching
//! - **Fitness** ([`fitness`]) - Linear-decay fit of metrics against ranges
//! - **Results** ([`result`]) - `ValidationResult`, per-population scores, warnings and violations
//! - **Configuration** ([`config`]) - Scoring constants and batch settings with builders
//! - **Progress Monitoring** ([`progress`]) - Batch progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-level error umbrella

pub mod blend;
pub mod config;
pub mod error;
pub mod fitness;
pub mod motif;
pub mod progress;
pub mod result;
