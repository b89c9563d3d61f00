//! # Registry Module
//!
//! Runtime indexes built from declarative classifier tables.
//!
//! - [`types`] - Type registry mapping type names to radius and class
//! - [`rules`] - Two-tier rule table mapping (residue, atom) to a type
//! - [`error`] - Build-time validation errors
//!
//! A [`rules::RuleTable`] is always built against a [`types::TypeRegistry`],
//! and stores resolved type indices rather than names, so every rule that
//! made it into a table is guaranteed to resolve.

pub mod error;
pub mod rules;
pub mod types;

pub use error::BuildError;
pub use rules::{MatchTier, RuleMatch, RuleTable};
pub use types::{AtomType, TypeRegistry};
