use super::Classifier;
use super::error::ClassifierError;
use crate::core::models::residue::ResidueKind;

/// Classifies atoms by the identity of their residue alone.
///
/// Class indices are [`ResidueKind`] discriminants and class names are residue
/// names. Unrecognized residues fall into [`ResidueKind::Unknown`], so
/// `classify` never misses. Radii are not defined for this classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResidueClassifier;

impl ResidueClassifier {
    pub fn residue_kind(&self, residue: &str) -> ResidueKind {
        ResidueKind::from_residue_name(residue)
    }
}

impl Classifier for ResidueClassifier {
    fn name(&self) -> &str {
        "residue"
    }

    fn radius(&self, _residue: &str, _atom: &str) -> Result<Option<f64>, ClassifierError> {
        Err(ClassifierError::Unsupported {
            classifier: self.name().to_string(),
            operation: "radius",
        })
    }

    fn classify(&self, residue: &str, _atom: &str) -> Option<usize> {
        Some(self.residue_kind(residue).index())
    }

    fn class_name(&self, class: usize) -> Result<&str, ClassifierError> {
        ResidueKind::from_index(class)
            .map(ResidueKind::as_str)
            .ok_or(ClassifierError::InvalidIndex {
                index: class,
                count: self.class_count(),
            })
    }

    fn class_count(&self) -> usize {
        ResidueKind::ALL.len()
    }
}
