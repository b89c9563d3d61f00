//! # Core Module
//!
//! The data layer of the classification engine: declarative table models,
//! the registries they are compiled into, table loading, and the
//! element-based radius fallback.
//!
//! ## Architecture
//!
//! - **Table Models** ([`models`]) - Type and rule records, residue enumeration
//! - **Registries** ([`registry`]) - Type registry and two-tier rule table
//! - **File I/O** ([`io`]) - TOML and CSV loaders for custom tables
//! - **Element Radii** ([`elements`]) - Van der Waals radii by element symbol
//! - **Utilities** ([`utils`]) - Residue and atom name normalization
//!
//! Nothing in this module is process-global; every registry is owned by the
//! classifier built from it.

pub mod elements;
pub mod io;
pub mod models;
pub mod registry;
pub mod utils;
