//! # Biophysics Module
//!
//! Composition-based estimation of the biophysical properties of a candidate sequence.
//!
//! ## Overview
//!
//! Every property is a pure function of the residue string and a handful of static,
//! process-wide lookup tables. Nothing here allocates shared state or performs I/O, so the
//! analyzer can be called concurrently from any number of worker threads.
//!
//! - [`tables`] - Immutable per-residue scales (Kyte-Doolittle hydropathy, Chou-Fasman
//!   propensities, pKa values) and residue classification sets
//! - [`charge`] - Henderson-Hasselbalch charge model and the bounded isoelectric-point search
//! - [`analyzer`] - Produces the [`analyzer::Metrics`] snapshot for a sequence
//!
//! ```
//! use healdette::core::biophysics::analyzer::analyze;
//!
//! let metrics = analyze("FWYFWY").unwrap();
//! assert_eq!(metrics.aromatic_content, 100.0);
//! ```

pub mod analyzer;
pub mod charge;
pub mod tables;
