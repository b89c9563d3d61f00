use super::error::BuildError;
use super::types::TypeRegistry;
use crate::core::models::spec::{ResiduePattern, RuleSpec, WILDCARD_TOKEN};
use crate::core::utils::names::{normalize_atom_name, normalize_residue_name};
use std::collections::HashMap;

/// Which tier of the rule table produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    /// A rule declared for this exact residue name.
    Exact,
    /// A rule declared for any residue.
    Wildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// Index of the resolved type in the [`TypeRegistry`] the table was built against.
    pub type_index: usize,
    pub tier: MatchTier,
}

/// Two-tier index from (residue, atom) to atom types.
///
/// Residue-specific rules live in the primary index and shadow the wildcard
/// index, so common backbone atoms can be declared once for all residues while
/// exceptions (e.g. proline's ring carbons) are declared per residue.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    exact: HashMap<String, HashMap<String, usize>>,
    wildcard: HashMap<String, usize>,
}

impl RuleTable {
    /// Builds the table, resolving every rule's type name against `types`.
    ///
    /// Residue and atom names are normalized the same way queries are, so a
    /// rule declared as `" CA "` matches a query for `"CA"`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UndefinedType`] if a rule names a type missing
    /// from `types`, [`BuildError::DuplicateRule`] if the same (residue
    /// pattern, atom) pair is declared twice, [`BuildError::EmptyName`]
    /// for blank residue or atom names, and [`BuildError::ReservedResidueName`]
    /// for an exact rule on a residue named like the wildcard token.
    pub fn build(specs: &[RuleSpec], types: &TypeRegistry) -> Result<Self, BuildError> {
        let mut table = Self::default();

        for spec in specs {
            let atom = normalize_atom_name(&spec.atom);
            if atom.is_empty() {
                return Err(BuildError::EmptyName { field: "atom name" });
            }
            let type_index =
                types
                    .index_of(&spec.type_name)
                    .ok_or_else(|| BuildError::UndefinedType {
                        residue: spec.residue.to_string().trim().to_string(),
                        atom: atom.to_string(),
                        type_name: spec.type_name.trim().to_string(),
                    })?;

            let (residue, slot) = match &spec.residue {
                ResiduePattern::Exact(name) => {
                    let residue = normalize_residue_name(name);
                    if residue.is_empty() {
                        return Err(BuildError::EmptyName {
                            field: "residue name",
                        });
                    }
                    if residue == WILDCARD_TOKEN {
                        return Err(BuildError::ReservedResidueName {
                            name: residue.to_string(),
                        });
                    }
                    (
                        residue.to_string(),
                        table.exact.entry(residue.to_string()).or_default(),
                    )
                }
                ResiduePattern::Any => (ResiduePattern::Any.to_string(), &mut table.wildcard),
            };

            if slot.insert(atom.to_string(), type_index).is_some() {
                return Err(BuildError::DuplicateRule {
                    residue,
                    atom: atom.to_string(),
                });
            }
        }

        Ok(table)
    }

    /// Looks up the rule for an atom, preferring an exact residue rule over a
    /// wildcard rule. `None` means no rule covers the atom.
    pub fn find(&self, residue: &str, atom: &str) -> Option<RuleMatch> {
        let residue = normalize_residue_name(residue);
        let atom = normalize_atom_name(atom);

        if let Some(&type_index) = self.exact.get(residue).and_then(|atoms| atoms.get(atom)) {
            return Some(RuleMatch {
                type_index,
                tier: MatchTier::Exact,
            });
        }
        self.wildcard.get(atom).map(|&type_index| RuleMatch {
            type_index,
            tier: MatchTier::Wildcard,
        })
    }

    pub fn exact_rule_count(&self) -> usize {
        self.exact.values().map(HashMap::len).sum()
    }

    pub fn wildcard_rule_count(&self) -> usize {
        self.wildcard.len()
    }

    pub fn len(&self) -> usize {
        self.exact_rule_count() + self.wildcard_rule_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Residue names with at least one residue-specific rule.
    pub fn residues(&self) -> impl Iterator<Item = &str> {
        self.exact.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::spec::TypeSpec;

    fn registry() -> TypeRegistry {
        TypeRegistry::build(&[
            TypeSpec::new("C_ALI", 2.00, "Apolar"),
            TypeSpec::new("C_ARO", 1.75, "Apolar"),
            TypeSpec::new("N", 1.55, "Polar"),
            TypeSpec::new("O", 1.40, "Polar"),
        ])
        .unwrap()
    }

    fn table(specs: &[RuleSpec]) -> Result<RuleTable, BuildError> {
        RuleTable::build(specs, &registry())
    }

    #[test]
    fn exact_rule_overrides_wildcard_rule() {
        let types = registry();
        let table = RuleTable::build(
            &[
                RuleSpec::any("CB", "C_ALI"),
                RuleSpec::exact("PRO", "CB", "C_ARO"),
            ],
            &types,
        )
        .unwrap();

        let pro = table.find("PRO", "CB").unwrap();
        assert_eq!(pro.tier, MatchTier::Exact);
        assert_eq!(pro.type_index, types.index_of("C_ARO").unwrap());

        let ala = table.find("ALA", "CB").unwrap();
        assert_eq!(ala.tier, MatchTier::Wildcard);
        assert_eq!(ala.type_index, types.index_of("C_ALI").unwrap());
    }

    #[test]
    fn exact_rule_wins_regardless_of_declaration_order() {
        let types = registry();
        let table = RuleTable::build(
            &[
                RuleSpec::exact("PRO", "CB", "C_ARO"),
                RuleSpec::any("CB", "C_ALI"),
            ],
            &types,
        )
        .unwrap();
        assert_eq!(table.find("PRO", "CB").unwrap().tier, MatchTier::Exact);
    }

    #[test]
    fn find_returns_none_when_no_rule_matches() {
        let table = table(&[RuleSpec::exact("ALA", "CA", "C_ALI")]).unwrap();
        assert!(table.find("ALA", "CZ").is_none());
        assert!(table.find("GLY", "CA").is_none());
    }

    #[test]
    fn find_normalizes_query_names() {
        let table = table(&[RuleSpec::exact("ALA", "CA", "C_ALI")]).unwrap();
        assert!(table.find(" ALA ", " CA ").is_some());
        assert!(table.find("ALA A", "CA").is_some());
    }

    #[test]
    fn build_normalizes_declared_names() {
        let table = table(&[RuleSpec::exact(" ALA ", " CA ", " C_ALI ")]).unwrap();
        assert!(table.find("ALA", "CA").is_some());
    }

    #[test]
    fn find_is_case_sensitive() {
        let table = table(&[RuleSpec::exact("ALA", "CA", "C_ALI")]).unwrap();
        assert!(table.find("ala", "CA").is_none());
        assert!(table.find("ALA", "ca").is_none());
    }

    #[test]
    fn build_fails_on_undefined_type() {
        let err = table(&[RuleSpec::exact("ALA", "CA", "C4H1")]).unwrap_err();
        assert_eq!(
            err,
            BuildError::UndefinedType {
                residue: "ALA".to_string(),
                atom: "CA".to_string(),
                type_name: "C4H1".to_string(),
            }
        );
    }

    #[test]
    fn build_fails_on_duplicate_exact_rule() {
        let err = table(&[
            RuleSpec::exact("ALA", "CA", "C_ALI"),
            RuleSpec::exact("ALA", "CA", "C_ARO"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateRule {
                residue: "ALA".to_string(),
                atom: "CA".to_string(),
            }
        );
    }

    #[test]
    fn build_fails_on_duplicate_wildcard_rule() {
        let err = table(&[RuleSpec::any("N", "N"), RuleSpec::any(" N ", "N")]).unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateRule {
                residue: "ANY".to_string(),
                atom: "N".to_string(),
            }
        );
    }

    #[test]
    fn same_atom_in_different_residues_is_not_a_duplicate() {
        let table = table(&[
            RuleSpec::exact("ALA", "CB", "C_ALI"),
            RuleSpec::exact("PHE", "CB", "C_ALI"),
            RuleSpec::any("CB", "C_ALI"),
        ])
        .unwrap();
        assert_eq!(table.exact_rule_count(), 2);
        assert_eq!(table.wildcard_rule_count(), 1);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn build_fails_on_blank_names() {
        assert_eq!(
            table(&[RuleSpec::exact("ALA", "  ", "C_ALI")]).unwrap_err(),
            BuildError::EmptyName { field: "atom name" }
        );
        assert_eq!(
            table(&[RuleSpec::exact(" ", "CA", "C_ALI")]).unwrap_err(),
            BuildError::EmptyName {
                field: "residue name"
            }
        );
    }

    #[test]
    fn build_rejects_exact_rule_on_wildcard_token() {
        let err = table(&[RuleSpec::new(
            ResiduePattern::Exact(" ANY ".to_string()),
            "CA",
            "C_ALI",
        )])
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::ReservedResidueName {
                name: "ANY".to_string()
            }
        );
    }

    #[test]
    fn residues_lists_exact_rule_residues() {
        let table = table(&[
            RuleSpec::exact("ALA", "CB", "C_ALI"),
            RuleSpec::exact("ALA", "CA", "C_ALI"),
            RuleSpec::any("O", "O"),
        ])
        .unwrap();
        let residues: Vec<_> = table.residues().collect();
        assert_eq!(residues, vec!["ALA"]);
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = table(&[]).unwrap();
        assert!(table.is_empty());
        assert!(table.find("ALA", "CA").is_none());
    }
}
