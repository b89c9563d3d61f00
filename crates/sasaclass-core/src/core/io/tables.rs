use crate::core::models::spec::{ClassifierTables, RuleSpec};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

impl ClassifierTables {
    /// Parses a TOML document holding `[[types]]` and `[[rules]]` arrays.
    ///
    /// ```toml
    /// [[types]]
    /// name = "C_ALI"
    /// radius = 2.0
    /// class = "Apolar"
    ///
    /// [[rules]]
    /// residue = "ANY"
    /// atom = "CA"
    /// type = "C_ALI"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a complete table set from a TOML file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let tables = Self::from_toml_str(&content).map_err(|e| TableLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        debug!(
            types = tables.types.len(),
            rules = tables.rules.len(),
            "Loaded classifier tables."
        );
        Ok(tables)
    }

    /// Loads types (and optionally rules) from a TOML file, then appends the
    /// rules listed in a CSV file with a `residue,atom,type` header.
    #[instrument(skip_all)]
    pub fn load_with_rules_csv(
        types_path: &Path,
        rules_path: &Path,
    ) -> Result<Self, TableLoadError> {
        let mut tables = Self::load(types_path)?;
        let rules = load_rules_csv(rules_path)?;
        tables.rules.extend(rules);
        Ok(tables)
    }
}

/// Reads rule records from a CSV file. Surrounding whitespace in fields is
/// trimmed; `ANY` in the residue column denotes the wildcard.
pub fn load_rules_csv(path: &Path) -> Result<Vec<RuleSpec>, TableLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|e| TableLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

    let mut rules = Vec::new();
    for result in reader.deserialize::<RuleSpec>() {
        let record = result.map_err(|e| TableLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        rules.push(record);
    }
    debug!(rules = rules.len(), "Loaded rule table from CSV.");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::spec::{ResiduePattern, TypeSpec};
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    const TABLES_TOML: &str = r#"
        [[types]]
        name = "C_ALI"
        radius = 2.0
        class = "Apolar"

        [[types]]
        name = "WATER"
        radius = 1.4
        class = "Water"
        comment = "solvent"

        [[rules]]
        residue = "ANY"
        atom = "CA"
        type = "C_ALI"

        [[rules]]
        residue = "HOH"
        atom = "O"
        type = "WATER"
    "#;

    #[test]
    fn from_toml_str_parses_types_and_rules_in_order() {
        let tables = ClassifierTables::from_toml_str(TABLES_TOML).unwrap();
        assert_eq!(
            tables.types,
            vec![
                TypeSpec::new("C_ALI", 2.0, "Apolar"),
                TypeSpec::new("WATER", 1.4, "Water").with_comment("solvent"),
            ]
        );
        assert_eq!(tables.rules[0], RuleSpec::any("CA", "C_ALI"));
        assert_eq!(tables.rules[1].residue, ResiduePattern::exact("HOH"));
    }

    #[test]
    fn from_toml_str_rejects_unknown_fields() {
        let content = r#"
            [[types]]
            name = "C"
            radius = 1.0
            class = "Apolar"
            charge = 0.0
        "#;
        assert!(ClassifierTables::from_toml_str(content).is_err());
    }

    #[test]
    fn from_toml_str_rejects_non_numeric_radius() {
        let content = r#"
            [[types]]
            name = "C"
            radius = "big"
            class = "Apolar"
        "#;
        assert!(ClassifierTables::from_toml_str(content).is_err());
    }

    #[test]
    fn load_succeeds_with_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tables.toml");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", TABLES_TOML).unwrap();

        let tables = ClassifierTables::load(&path).unwrap();
        assert_eq!(tables.types.len(), 2);
        assert_eq!(tables.rules.len(), 2);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ClassifierTables::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(TableLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "this is not toml").unwrap();
        let result = ClassifierTables::load(&path);
        assert!(matches!(result, Err(TableLoadError::Toml { .. })));
    }

    #[test]
    fn load_rules_csv_parses_wildcard_and_exact_rules() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.csv");
        fs::write(
            &path,
            "residue,atom,type\n# backbone\nANY, CA ,C_ALI\nHOH,O,WATER\n",
        )
        .unwrap();

        let rules = load_rules_csv(&path).unwrap();
        assert_eq!(
            rules,
            vec![
                RuleSpec::any("CA", "C_ALI"),
                RuleSpec::exact("HOH", "O", "WATER"),
            ]
        );
    }

    #[test]
    fn load_rules_csv_fails_for_malformed_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "residue,atom\nALA").unwrap();
        assert!(matches!(
            load_rules_csv(&path),
            Err(TableLoadError::Csv { .. })
        ));
    }

    #[test]
    fn load_rules_csv_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_rules_csv(&dir.path().join("missing.csv")),
            Err(TableLoadError::Csv { .. })
        ));
    }

    #[test]
    fn load_with_rules_csv_appends_csv_rules_after_toml_rules() {
        let dir = tempdir().unwrap();
        let types_path = dir.path().join("types.toml");
        let rules_path = dir.path().join("rules.csv");
        fs::write(&types_path, TABLES_TOML).unwrap();
        fs::write(&rules_path, "residue,atom,type\nANY,CB,C_ALI\n").unwrap();

        let tables = ClassifierTables::load_with_rules_csv(&types_path, &rules_path).unwrap();
        assert_eq!(tables.rules.len(), 3);
        assert_eq!(tables.rules[2], RuleSpec::any("CB", "C_ALI"));
    }
}
