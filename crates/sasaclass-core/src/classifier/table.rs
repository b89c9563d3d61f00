use super::builtin;
use super::error::ClassifierError;
use super::Classifier;
use crate::core::models::spec::ClassifierTables;
use crate::core::registry::{BuildError, MatchTier, RuleTable, TypeRegistry};
use tracing::{debug, trace};

/// Full result of a successful table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomClassification<'a> {
    pub type_name: &'a str,
    pub radius: f64,
    pub class: usize,
    pub tier: MatchTier,
}

/// A classifier compiled from a type table and a rule table.
///
/// Both built-in variants (ProtOr and OONS) are instances of this type, as is
/// any classifier built from user-supplied tables. Once built it is immutable
/// and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct TableClassifier {
    name: String,
    types: TypeRegistry,
    rules: RuleTable,
}

impl TableClassifier {
    /// Builds a classifier from declarative tables.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if the type table is invalid or any rule is
    /// inconsistent with it. No classifier is produced in that case.
    pub fn from_tables(name: &str, tables: &ClassifierTables) -> Result<Self, BuildError> {
        let types = TypeRegistry::build(&tables.types)?;
        let rules = RuleTable::build(&tables.rules, &types)?;
        debug!(
            classifier = name,
            types = types.len(),
            exact_rules = rules.exact_rule_count(),
            wildcard_rules = rules.wildcard_rule_count(),
            classes = types.class_count(),
            "Built table classifier."
        );
        Ok(Self {
            name: name.to_string(),
            types,
            rules,
        })
    }

    /// The fine-grained ProtOr classifier, used as the process default.
    pub fn protor() -> Result<Self, BuildError> {
        Self::from_tables("ProtOr", &builtin::protor_tables())
    }

    /// The coarser OONS classifier.
    pub fn oons() -> Result<Self, BuildError> {
        Self::from_tables("OONS", &builtin::oons_tables())
    }

    /// Resolves an atom to its type, radius and class. Returns `None` when no
    /// rule covers the atom; callers decide on a fallback, such as
    /// [`crate::core::elements::guess_radius`].
    pub fn lookup(&self, residue: &str, atom: &str) -> Option<AtomClassification<'_>> {
        let Some(hit) = self.rules.find(residue, atom) else {
            trace!(classifier = %self.name, residue, atom, "No rule for atom.");
            return None;
        };
        let atom_type = self.types.by_index(hit.type_index)?;
        Some(AtomClassification {
            type_name: &atom_type.name,
            radius: atom_type.radius,
            class: atom_type.class,
            tier: hit.tier,
        })
    }

    pub fn type_registry(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.rules
    }
}

impl Classifier for TableClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn radius(&self, residue: &str, atom: &str) -> Result<Option<f64>, ClassifierError> {
        Ok(self.lookup(residue, atom).map(|hit| hit.radius))
    }

    fn classify(&self, residue: &str, atom: &str) -> Option<usize> {
        self.lookup(residue, atom).map(|hit| hit.class)
    }

    fn class_name(&self, class: usize) -> Result<&str, ClassifierError> {
        self.types
            .class_name(class)
            .ok_or(ClassifierError::InvalidIndex {
                index: class,
                count: self.types.class_count(),
            })
    }

    fn class_count(&self) -> usize {
        self.types.class_count()
    }
}
