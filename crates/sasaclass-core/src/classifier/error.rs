use crate::core::registry::BuildError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Failed to build classifier: {source}")]
    Build {
        #[from]
        source: BuildError,
    },

    #[error("Class index {index} is out of range for a classifier with {count} classes")]
    InvalidIndex { index: usize, count: usize },

    #[error("Classifier '{classifier}' does not support '{operation}'")]
    Unsupported {
        classifier: String,
        operation: &'static str,
    },
}
