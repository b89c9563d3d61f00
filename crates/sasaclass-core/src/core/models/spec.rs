use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Token used in table files to denote the wildcard residue.
///
/// The name is reserved: an exact rule for a residue called `ANY` cannot be
/// written back as text, so [`crate::core::registry::RuleTable::build`]
/// rejects it.
pub const WILDCARD_TOKEN: &str = "ANY";

/// The residue side of a classification rule.
///
/// A rule either applies to one exact residue name or to every residue. Exact
/// rules always take precedence over wildcard rules for the same atom name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ResiduePattern {
    /// Matches only the named residue (e.g. "PRO").
    Exact(String),
    /// Matches any residue.
    Any,
}

impl ResiduePattern {
    pub fn exact(name: &str) -> Self {
        ResiduePattern::Exact(name.to_string())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, ResiduePattern::Any)
    }
}

impl From<String> for ResiduePattern {
    fn from(s: String) -> Self {
        if s.trim() == WILDCARD_TOKEN {
            ResiduePattern::Any
        } else {
            ResiduePattern::Exact(s)
        }
    }
}

impl FromStr for ResiduePattern {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResiduePattern::from(s.to_string()))
    }
}

impl fmt::Display for ResiduePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResiduePattern::Exact(name) => write!(f, "{}", name),
            ResiduePattern::Any => write!(f, "{}", WILDCARD_TOKEN),
        }
    }
}

/// Declarative definition of one atom type: a named radius and class label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    pub name: String,
    pub radius: f64,
    pub class: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl TypeSpec {
    pub fn new(name: &str, radius: f64, class: &str) -> Self {
        Self {
            name: name.to_string(),
            radius,
            class: class.to_string(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

/// Declarative rule assigning an atom type to an atom of a residue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub residue: ResiduePattern,
    pub atom: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl RuleSpec {
    pub fn new(residue: ResiduePattern, atom: &str, type_name: &str) -> Self {
        Self {
            residue,
            atom: atom.to_string(),
            type_name: type_name.to_string(),
        }
    }

    pub fn exact(residue: &str, atom: &str, type_name: &str) -> Self {
        Self::new(ResiduePattern::exact(residue), atom, type_name)
    }

    pub fn any(atom: &str, type_name: &str) -> Self {
        Self::new(ResiduePattern::Any, atom, type_name)
    }
}

/// The two ordered tables a classifier is built from.
///
/// Order matters: class indices are assigned in order of first appearance of
/// each class label in `types`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierTables {
    #[serde(default)]
    pub types: Vec<TypeSpec>,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl ClassifierTables {
    pub fn new(types: Vec<TypeSpec>, rules: Vec<RuleSpec>) -> Self {
        Self { types, rules }
    }

    pub fn with_type(mut self, spec: TypeSpec) -> Self {
        self.types.push(spec);
        self
    }

    pub fn with_rule(mut self, spec: RuleSpec) -> Self {
        self.rules.push(spec);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.rules.is_empty()
    }
}
