//! # I/O Module
//!
//! Loading of custom classifier tables from configuration files.
//!
//! - [`tables`] - TOML table documents and CSV rule lists
//!
//! Loaders only parse; validation (duplicate names, dangling type references,
//! invalid radii) happens when the tables are built into a classifier.

pub mod tables;
