//! # Core Models Module
//!
//! Fundamental value types shared by every layer of Healdette.
//!
//! - [`residue`] - The 20-letter amino-acid alphabet as a strongly-typed enum
//! - [`sequence`] - A validated, non-empty candidate sequence
//!
//! A [`sequence::Sequence`] can only be obtained through its parsing constructor, so any
//! code holding one may assume the alphabet invariant without re-checking it.
//!
//! ```
//! use healdette::core::models::sequence::Sequence;
//!
//! let seq = Sequence::parse("WYRFKWYF").unwrap();
//! assert_eq!(seq.pairs().count(), 7);
//! ```

pub mod residue;
pub mod sequence;
