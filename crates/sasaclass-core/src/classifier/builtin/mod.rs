//! Built-in classifier tables.
//!
//! - [`protor_tables`] - ProtOr radii (Tsai et al. 1999), one exact rule per
//!   atom of every supported residue. This is the default classifier.
//! - [`oons_tables`] - The coarser OONS radii (Ooi et al. 1987), with wildcard
//!   backbone and nucleotide rules and residue-specific side-chain rules.

use crate::core::models::spec::{ClassifierTables, RuleSpec, TypeSpec};

mod oons;
mod protor;

/// `(name, radius, class, comment)`
type TypeRow = (&'static str, f64, &'static str, Option<&'static str>);
/// `(residue, atom, type)`
type RuleRow = (&'static str, &'static str, &'static str);
/// `(atom, type)`, applying to any residue.
type WildcardRow = (&'static str, &'static str);

fn tables_from_rows(
    types: &[TypeRow],
    wildcard_rules: &[WildcardRow],
    rules: &[RuleRow],
) -> ClassifierTables {
    let types = types
        .iter()
        .map(|&(name, radius, class, comment)| {
            let spec = TypeSpec::new(name, radius, class);
            match comment {
                Some(comment) => spec.with_comment(comment),
                None => spec,
            }
        })
        .collect();
    let rules = wildcard_rules
        .iter()
        .map(|&(atom, type_name)| RuleSpec::any(atom, type_name))
        .chain(
            rules
                .iter()
                .map(|&(residue, atom, type_name)| RuleSpec::exact(residue, atom, type_name)),
        )
        .collect();
    ClassifierTables::new(types, rules)
}

pub fn protor_tables() -> ClassifierTables {
    tables_from_rows(protor::TYPES, &[], protor::RULES)
}

pub fn oons_tables() -> ClassifierTables {
    tables_from_rows(oons::TYPES, oons::WILDCARD_RULES, oons::RULES)
}
