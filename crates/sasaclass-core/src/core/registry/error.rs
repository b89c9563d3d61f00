use thiserror::Error;

/// Errors raised while building a classifier from declarative tables.
///
/// A build error always means no classifier was created; there is no partial
/// or defaulted result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    #[error("Atom type '{name}' is defined more than once")]
    DuplicateType { name: String },

    #[error("Atom type '{name}' has invalid radius {radius}; radii must be finite and non-negative")]
    InvalidRadius { name: String, radius: f64 },

    #[error("Empty {field} in classifier table")]
    EmptyName { field: &'static str },

    #[error("Atom type '{name}' has an empty class label")]
    EmptyClass { name: String },

    #[error("Rule for atom '{atom}' of residue '{residue}' references undefined type '{type_name}'")]
    UndefinedType {
        residue: String,
        atom: String,
        type_name: String,
    },

    #[error("Residue name '{name}' is reserved for wildcard rules")]
    ReservedResidueName { name: String },

    #[error("Rule for atom '{atom}' of residue '{residue}' is declared more than once")]
    DuplicateRule { residue: String, atom: String },
}
