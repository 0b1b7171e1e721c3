//! # Core Module
//!
//! The stateless foundation of Healdette: residue and sequence models, the biophysical property
//! tables and analyzer, and the typed population configuration.
//!
//! ## Overview
//!
//! Everything in this layer is either immutable static data or a pure function of its inputs.
//! The [`engine`](crate::engine) layer builds scoring logic on top of these pieces, and the
//! [`workflows`](crate::workflows) layer ties them into complete validation runs.
//!
//! ## Architecture
//!
//! - **Sequence Representation** ([`models`]) - The 20-letter amino-acid alphabet and validated sequences
//! - **Property Estimation** ([`biophysics`]) - Composition metrics, charge model and isoelectric point
//! - **Population Configuration** ([`config`]) - Schema validation and loading of ancestry-weighted configs

pub mod biophysics;
pub mod config;
pub mod models;
