//! # Configuration Module
//!
//! Loading and validation of population configuration documents.
//!
//! A configuration is read once per run, pushed through [`validator::ConfigValidator`] and
//! from then on shared read-only by every validation call. The validator is the only way to
//! obtain a [`models::PopulationConfig`]: it either returns a complete, typed configuration or
//! every problem it found, each tagged with the dotted path of the offending field.
//!
//! - [`models`] - Typed configuration structures (`GlobalParams`, `Population`, ranges)
//! - [`validator`] - Schema walker producing `PopulationConfig` or `ConfigErrors`
//! - [`loader`] - File loading for JSON and TOML documents
//! - [`error`] - `ConfigError`, `ConfigErrors` and `ConfigLoadError`

pub mod error;
pub mod loader;
pub mod models;
pub mod validator;
