//! # Healdette Core Library
//!
//! Ancestry-weighted validation of candidate amino-acid sequences.
//!
//! Given a candidate sequence and a population configuration, the library computes
//! composition-based biophysical metrics, scores population-specific binding motifs, blends the
//! per-population acceptance ranges by ancestry weight and returns a structured, deterministic
//! verdict.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Residue and sequence models, the static biophysical property
//!   tables and analyzer, and the strongly-typed population configuration with its validator.
//!
//! - **[`engine`]: The Logic Core.** Pure scoring building blocks: the population parameter
//!   blender, the binding motif scorer, linear-decay fitness and the result types.
//!
//! - **[`workflows`]: The Public API.** The `WeightedSequenceValidator` orchestrator and the
//!   bounded, order-preserving batch runner.
//!
//! ## Example
//!
//! ```
//! use healdette::core::config::validator::ConfigValidator;
//! use healdette::workflows::validate::validate;
//!
//! let config = ConfigValidator::new()
//!     .validate_str(
//!         r#"{
//!             "global_params": {
//!                 "sequence_length": { "min": 4, "max": 40 },
//!                 "structural_params": {
//!                     "helix_propensity": { "min": 0.5, "max": 1.5 },
//!                     "sheet_propensity": { "min": 0.5, "max": 1.6 }
//!                 },
//!                 "homopolymer_threshold": 4
//!             },
//!             "populations": {
//!                 "yoruba": {
//!                     "ancestry_weight": 1.0,
//!                     "binding_motifs": ["WY", "RF", "KW", "YF"],
//!                     "biophysical_params": {
//!                         "aromatic_content": { "min": 20, "max": 80 },
//!                         "hydrophobic_content": { "min": 30, "max": 80 },
//!                         "net_charge": { "min": 0, "max": 4 }
//!                     }
//!                 }
//!             }
//!         }"#,
//!     )
//!     .unwrap();
//!
//! let result = validate("WYRFKWYF", &config).unwrap();
//! assert!(result.valid);
//! assert!(result.errors.is_empty());
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
