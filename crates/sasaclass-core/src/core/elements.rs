use phf::{Map, phf_map};

// Mantina et al. "Consistent van der Waals Radii for the Whole Main Group",
// J. Phys. Chem. A 113 (19), 2009. Keys are two-character, right-justified
// element symbols as found in columns 77-78 of PDB ATOM records.
#[rustfmt::skip]
static ELEMENT_RADII: Map<&'static str, f64> = phf_map! {
    // --- Elements of the regular amino acids and nucleotides ---
    " H" => 1.10, " C" => 1.70, " N" => 1.55, " O" => 1.52,
    " P" => 1.80, " S" => 1.80, "SE" => 1.90,

    // --- Halogens ---
    " F" => 1.47, "CL" => 1.75, "BR" => 1.83, " I" => 1.98,

    // --- Others ---
    "LI" => 1.81, "BE" => 1.53, " B" => 1.92,
    "NA" => 2.27, "MG" => 1.74, "AL" => 1.84, "SI" => 2.10,
    " K" => 2.75, "CA" => 2.31, "GA" => 1.87, "GE" => 2.11, "AS" => 1.85,
    "RB" => 3.03, "SR" => 2.49, "IN" => 1.93, "SN" => 2.17, "SB" => 2.06, "TE" => 2.06,
};

/// Van der Waals radius for a two-character, right-justified element symbol.
///
/// The match is exact: `" C"` is carbon, while `"C"`, `"C "` and `" c"` are
/// misses. Ionization changes effective radii, so many of the metals listed
/// here are better excluded from a surface calculation than guessed.
pub fn guess_radius(symbol: &str) -> Option<f64> {
    ELEMENT_RADII.get(symbol).copied()
}

/// Like [`guess_radius`], but first brings a loosely formatted symbol
/// (`"c"`, `"Se"`, `" N "`) into the two-character upper-case form.
pub fn guess_radius_for_element(element: &str) -> Option<f64> {
    let element = element.trim().to_ascii_uppercase();
    match element.len() {
        1 | 2 => guess_radius(&format!("{:>2}", element)),
        _ => None,
    }
}

pub fn known_symbols() -> impl Iterator<Item = &'static str> {
    ELEMENT_RADII.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_radius_returns_carbon_radius_for_padded_symbol() {
        assert_eq!(guess_radius(" C"), Some(1.70));
        assert_eq!(guess_radius("SE"), Some(1.90));
        assert_eq!(guess_radius(" H"), Some(1.10));
    }

    #[test]
    fn guess_radius_misses_unknown_symbol() {
        assert_eq!(guess_radius("XX"), None);
        assert_eq!(guess_radius(""), None);
    }

    #[test]
    fn guess_radius_is_format_sensitive() {
        assert_eq!(guess_radius("C"), None);
        assert_eq!(guess_radius("C "), None);
        assert_eq!(guess_radius(" c"), None);
        assert_eq!(guess_radius("Se"), None);
    }

    #[test]
    fn calcium_and_alpha_carbon_are_not_confused() {
        assert_eq!(guess_radius("CA"), Some(2.31));
        assert_eq!(guess_radius(" C"), Some(1.70));
    }

    #[test]
    fn guess_radius_for_element_pads_and_uppercases() {
        assert_eq!(guess_radius_for_element("C"), Some(1.70));
        assert_eq!(guess_radius_for_element("c"), Some(1.70));
        assert_eq!(guess_radius_for_element("Se"), Some(1.90));
        assert_eq!(guess_radius_for_element(" N "), Some(1.55));
    }

    #[test]
    fn guess_radius_for_element_rejects_long_or_empty_input() {
        assert_eq!(guess_radius_for_element("CAL"), None);
        assert_eq!(guess_radius_for_element(""), None);
        assert_eq!(guess_radius_for_element("Xx"), None);
    }

    #[test]
    fn table_keys_are_two_characters_wide() {
        assert_eq!(known_symbols().count(), 29);
        assert!(known_symbols().all(|s| s.len() == 2));
    }
}
