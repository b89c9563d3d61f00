//! # sasaclass
//!
//! Atom radius and class assignment for solvent accessible surface area
//! calculations on biomolecular structures.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Declarative table models (`TypeSpec`,
//!   `RuleSpec`), the compiled `TypeRegistry` and `RuleTable`, the element
//!   radius table, residue identities and TOML/CSV loading of custom tables.
//!
//! - **[`classifier`]: The Public API.** The [`classifier::Classifier`] trait
//!   and its variants: the built-in ProtOr and OONS rule-table classifiers,
//!   the residue-identity classifier, the shared reference-counted default and
//!   per-class area aggregation.

pub mod classifier;
pub mod core;
