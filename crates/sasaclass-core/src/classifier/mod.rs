//! # Classifier Module
//!
//! The uniform classification interface and its implementations.
//!
//! ## Overview
//!
//! Every classifier answers the same four questions about an atom identified by
//! its residue and atom names: what radius should it get, which class does it
//! belong to, what is that class called, and how many classes are there. The
//! [`Classifier`] trait captures this, so a surface-area engine can hold any
//! variant behind `&dyn Classifier`.
//!
//! ## Variants
//!
//! - [`table::TableClassifier`] - Rule-table classifiers. The built-in ProtOr
//!   (default) and OONS variants, or any classifier built from custom tables.
//! - [`residue::ResidueClassifier`] - Classifies by residue identity only and
//!   has no notion of radius.
//!
//! ## Shared Default
//!
//! [`default::acquire_default`] hands out reference-counted handles to one
//! lazily built ProtOr classifier; the instance is dropped when the last
//! handle goes away.
//!
//! ```ignore
//! use sasaclass::classifier::{Classifier, acquire_default};
//!
//! let classifier = acquire_default()?;
//! let radius = classifier.radius("ALA", "CB")?;   // Some(1.88)
//! let class = classifier.classify("ALA", "CB");    // Some(0)
//! let label = classifier.class_name(class.unwrap())?; // "Apolar"
//! ```

mod builtin;
pub mod default;
pub mod error;
pub mod residue;
pub mod summary;
pub mod table;

pub use builtin::{oons_tables, protor_tables};
pub use default::{DefaultClassifier, acquire_default, default_refcount, release_default};
pub use error::ClassifierError;
pub use residue::ResidueClassifier;
pub use summary::ClassAreas;
pub use table::{AtomClassification, TableClassifier};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maps (residue, atom) pairs onto radii and classes.
///
/// A `None` from [`Classifier::radius`] or [`Classifier::classify`] means the
/// atom is not covered by the classifier. That is an ordinary outcome for real
/// structures and must be handled by the caller, for instance by falling back
/// to [`crate::core::elements::guess_radius`] or by skipping the atom.
pub trait Classifier: Send + Sync {
    fn name(&self) -> &str;

    /// Radius in Angstroms.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Unsupported`] for classifiers that do not
    /// assign radii.
    fn radius(&self, residue: &str, atom: &str) -> Result<Option<f64>, ClassifierError>;

    fn classify(&self, residue: &str, atom: &str) -> Option<usize>;

    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidIndex`] if `class` is not below
    /// [`Classifier::class_count`].
    fn class_name(&self, class: usize) -> Result<&str, ClassifierError>;

    fn class_count(&self) -> usize;

    /// Shorthand for `class_name(classify(residue, atom))`.
    fn class_label(&self, residue: &str, atom: &str) -> Option<&str> {
        self.classify(residue, atom)
            .and_then(|class| self.class_name(class).ok())
    }
}

/// Selects one of the built-in classifiers by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassifierKind {
    #[default]
    ProtOr,
    Oons,
    Residue,
}

impl ClassifierKind {
    pub fn build(self) -> Result<Box<dyn Classifier>, ClassifierError> {
        let classifier: Box<dyn Classifier> = match self {
            ClassifierKind::ProtOr => Box::new(TableClassifier::protor()?),
            ClassifierKind::Oons => Box::new(TableClassifier::oons()?),
            ClassifierKind::Residue => Box::new(ResidueClassifier),
        };
        Ok(classifier)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown classifier kind: '{0}' (expected 'protor', 'oons' or 'residue')")]
pub struct ParseClassifierKindError(pub String);

impl FromStr for ClassifierKind {
    type Err = ParseClassifierKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "protor" | "default" => Ok(ClassifierKind::ProtOr),
            "oons" => Ok(ClassifierKind::Oons),
            "residue" => Ok(ClassifierKind::Residue),
            _ => Err(ParseClassifierKindError(s.to_string())),
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ClassifierKind::ProtOr => "protor",
                ClassifierKind::Oons => "oons",
                ClassifierKind::Residue => "residue",
            }
        )
    }
}
