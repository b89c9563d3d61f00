//! # Core Models Module
//!
//! Plain data types shared by the registries and classifiers.
//!
//! - [`spec`] - Declarative type and rule records, and the table bundle a
//!   classifier is built from
//! - [`residue`] - The closed residue enumeration used by the residue-identity
//!   classifier

pub mod residue;
pub mod spec;
