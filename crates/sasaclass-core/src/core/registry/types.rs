use super::error::BuildError;
use crate::core::models::spec::TypeSpec;
use std::collections::HashMap;

/// A resolved atom type: radius in Angstroms plus an index into the owning
/// registry's class list.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomType {
    pub name: String,
    pub radius: f64,
    pub class: usize,
    pub comment: Option<String>,
}

/// Name-indexed set of atom types together with the class labels they use.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<AtomType>,
    index: HashMap<String, usize>,
    classes: Vec<String>,
}

impl TypeRegistry {
    /// Builds the registry from ordered type specs.
    ///
    /// Class labels get indices in order of first appearance, so a table that
    /// lists an apolar type first always has `Apolar` as class 0.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyName`] or [`BuildError::EmptyClass`] for blank
    /// names or labels, [`BuildError::InvalidRadius`] for negative, NaN or
    /// infinite radii, and [`BuildError::DuplicateType`] if a name repeats.
    pub fn build(specs: &[TypeSpec]) -> Result<Self, BuildError> {
        let mut registry = Self::default();

        for spec in specs {
            let name = spec.name.trim();
            if name.is_empty() {
                return Err(BuildError::EmptyName { field: "type name" });
            }
            if !spec.radius.is_finite() || spec.radius < 0.0 {
                return Err(BuildError::InvalidRadius {
                    name: name.to_string(),
                    radius: spec.radius,
                });
            }
            let label = spec.class.trim();
            if label.is_empty() {
                return Err(BuildError::EmptyClass {
                    name: name.to_string(),
                });
            }
            if registry.index.contains_key(name) {
                return Err(BuildError::DuplicateType {
                    name: name.to_string(),
                });
            }

            let class = registry.intern_class(label);
            registry.index.insert(name.to_string(), registry.types.len());
            registry.types.push(AtomType {
                name: name.to_string(),
                radius: spec.radius,
                class,
                comment: spec.comment.clone(),
            });
        }

        Ok(registry)
    }

    fn intern_class(&mut self, label: &str) -> usize {
        match self.classes.iter().position(|c| c == label) {
            Some(i) => i,
            None => {
                self.classes.push(label.to_string());
                self.classes.len() - 1
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AtomType> {
        self.index_of(name).map(|i| &self.types[i])
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name.trim()).copied()
    }

    pub fn by_index(&self, index: usize) -> Option<&AtomType> {
        self.types.get(index)
    }

    pub fn class_name(&self, class: usize) -> Option<&str> {
        self.classes.get(class).map(String::as_str)
    }

    pub fn class_index(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AtomType> {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<TypeSpec> {
        vec![
            TypeSpec::new("C4H3", 1.88, "Apolar"),
            TypeSpec::new("O1H0", 1.42, "Polar"),
            TypeSpec::new("C3H0", 1.61, "Apolar"),
            TypeSpec::new("O2H2", 1.46, "Water").with_comment("OHO"),
        ]
    }

    #[test]
    fn build_assigns_classes_in_first_appearance_order() {
        let registry = TypeRegistry::build(&specs()).unwrap();
        assert_eq!(registry.class_count(), 3);
        assert_eq!(registry.classes(), &["Apolar", "Polar", "Water"]);
        assert_eq!(registry.get("C3H0").unwrap().class, 0);
        assert_eq!(registry.get("O1H0").unwrap().class, 1);
        assert_eq!(registry.get("O2H2").unwrap().class, 2);
    }

    #[test]
    fn get_returns_radius_and_comment() {
        let registry = TypeRegistry::build(&specs()).unwrap();
        let water = registry.get("O2H2").unwrap();
        assert_eq!(water.radius, 1.46);
        assert_eq!(water.comment.as_deref(), Some("OHO"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn lookup_miss_is_distinct_from_first_type() {
        let registry = TypeRegistry::build(&specs()).unwrap();
        assert_eq!(registry.index_of("C4H3"), Some(0));
        assert_eq!(registry.index_of("XYZ"), None);
        assert!(registry.get("XYZ").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = TypeRegistry::build(&specs()).unwrap();
        assert!(registry.get("c4h3").is_none());
    }

    #[test]
    fn build_fails_on_duplicate_name() {
        let mut specs = specs();
        specs.push(TypeSpec::new("C4H3", 2.0, "Apolar"));
        assert_eq!(
            TypeRegistry::build(&specs).unwrap_err(),
            BuildError::DuplicateType {
                name: "C4H3".to_string()
            }
        );
    }

    #[test]
    fn build_fails_on_negative_radius() {
        let specs = vec![TypeSpec::new("BAD", -0.5, "Polar")];
        assert!(matches!(
            TypeRegistry::build(&specs),
            Err(BuildError::InvalidRadius { radius, .. }) if radius == -0.5
        ));
    }

    #[test]
    fn build_fails_on_non_finite_radius() {
        let specs = vec![TypeSpec::new("NAN", f64::NAN, "Polar")];
        assert!(matches!(
            TypeRegistry::build(&specs),
            Err(BuildError::InvalidRadius { .. })
        ));
        let specs = vec![TypeSpec::new("INF", f64::INFINITY, "Polar")];
        assert!(matches!(
            TypeRegistry::build(&specs),
            Err(BuildError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn build_accepts_zero_radius() {
        let registry = TypeRegistry::build(&[TypeSpec::new("DUMMY", 0.0, "Polar")]).unwrap();
        assert_eq!(registry.get("DUMMY").unwrap().radius, 0.0);
    }

    #[test]
    fn build_fails_on_blank_name_or_class() {
        assert_eq!(
            TypeRegistry::build(&[TypeSpec::new("  ", 1.0, "Polar")]).unwrap_err(),
            BuildError::EmptyName { field: "type name" }
        );
        assert_eq!(
            TypeRegistry::build(&[TypeSpec::new("X", 1.0, " ")]).unwrap_err(),
            BuildError::EmptyClass {
                name: "X".to_string()
            }
        );
    }

    #[test]
    fn build_trims_names_and_labels() {
        let registry =
            TypeRegistry::build(&[TypeSpec::new(" P4H0 ", 1.9, "Polar ")]).unwrap();
        assert!(registry.get("P4H0").is_some());
        assert_eq!(registry.class_name(0), Some("Polar"));
    }

    #[test]
    fn class_name_is_none_out_of_range() {
        let registry = TypeRegistry::build(&specs()).unwrap();
        assert_eq!(registry.class_name(2), Some("Water"));
        assert_eq!(registry.class_name(3), None);
        assert_eq!(registry.class_index("Polar"), Some(1));
    }

    #[test]
    fn empty_input_builds_empty_registry() {
        let registry = TypeRegistry::build(&[]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.class_count(), 0);
    }
}
