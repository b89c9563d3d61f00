use super::{RuleRow, TypeRow, WildcardRow};

// Ooi, T., Oobatake, M., Nemethy, G., & Scheraga, H. A. (1987). Accessible
// surface areas as a measure of the thermodynamic parameters of hydration of
// peptides. PNAS 84(10), 3086-3090.
//
// P and SE are not in the OONS paper. U_POL covers the ambiguous atoms of ASX
// and GLX.

#[rustfmt::skip]
pub(super) static TYPES: &[TypeRow] = &[
    ("C_ALI", 2.00, "Apolar", None),
    ("C_ARO", 1.75, "Apolar", None),
    ("C_CAR", 1.55, "Polar", None),
    ("N", 1.55, "Polar", None),
    ("O", 1.40, "Polar", None),
    ("S", 2.00, "Polar", None),
    ("P", 1.80, "Polar", None),
    ("SE", 1.90, "Polar", None),
    ("U_POL", 1.5, "Polar", Some("ASX, GLX")),
    ("WATER", 1.4, "Water", None),
];

#[rustfmt::skip]
pub(super) static WILDCARD_RULES: &[WildcardRow] = &[
    // Peptide backbone
    ("C", "C_CAR"),
    ("O", "O"),
    ("CA", "C_ALI"),
    ("N", "N"),
    ("CB", "C_ALI"),
    ("OXT", "O"),

    // Nucleotide phosphate
    ("P", "P"),
    ("OP1", "O"),
    ("OP2", "O"),
    ("OP3", "O"),
    ("O5'", "O"),

    // Ribose and deoxyribose
    ("C5'", "C_ALI"),
    ("C4'", "C_ARO"),
    ("O4'", "O"),
    ("C3'", "C_ARO"),
    ("O3'", "O"),
    ("C2'", "C_ARO"),
    ("O2'", "O"),
    ("C1'", "C_ARO"),

    // Bases, shared by A, C, G, I, T and U in both sugar forms
    ("N1", "N"),
    ("N2", "N"),
    ("N3", "N"),
    ("N4", "N"),
    ("N6", "N"),
    ("N7", "N"),
    ("N9", "N"),
    ("C2", "C_ARO"),
    ("C4", "C_ARO"),
    ("C5", "C_ARO"),
    ("C6", "C_ARO"),
    ("C7", "C_ARO"),
    ("C8", "C_ARO"),
    ("O2", "O"),
    ("O4", "O"),
    ("O6", "O"),

    // Methylation
    ("CM2", "C_ALI"),
];

#[rustfmt::skip]
pub(super) static RULES: &[RuleRow] = &[
    // Amino acid side chains
    ("ARG", "CG", "C_ALI"),    ("ARG", "CD", "C_ALI"),    ("ARG", "NE", "N"),        ("ARG", "CZ", "C_ALI"),
    ("ARG", "NH1", "N"),       ("ARG", "NH2", "N"),
    ("ASN", "CG", "C_CAR"),    ("ASN", "OD1", "O"),       ("ASN", "ND2", "N"),
    ("ASP", "CG", "C_CAR"),    ("ASP", "OD1", "O"),       ("ASP", "OD2", "O"),
    ("CYS", "SG", "S"),
    ("GLN", "CG", "C_ALI"),    ("GLN", "CD", "C_CAR"),    ("GLN", "OE1", "O"),       ("GLN", "NE2", "N"),
    ("GLU", "CG", "C_ALI"),    ("GLU", "CD", "C_CAR"),    ("GLU", "OE1", "O"),       ("GLU", "OE2", "O"),
    ("HIS", "CG", "C_ARO"),    ("HIS", "ND1", "N"),       ("HIS", "CD2", "C_ARO"),   ("HIS", "NE2", "N"),
    ("HIS", "CE1", "C_ARO"),
    ("ILE", "CG1", "C_ALI"),   ("ILE", "CG2", "C_ALI"),   ("ILE", "CD1", "C_ALI"),
    ("LEU", "CG", "C_ALI"),    ("LEU", "CD1", "C_ALI"),   ("LEU", "CD2", "C_ALI"),
    ("LYS", "CG", "C_ALI"),    ("LYS", "CD", "C_ALI"),    ("LYS", "CE", "C_ALI"),    ("LYS", "NZ", "N"),
    ("MET", "CG", "C_ALI"),    ("MET", "SD", "S"),        ("MET", "CE", "C_ALI"),
    ("PHE", "CG", "C_ARO"),    ("PHE", "CD1", "C_ARO"),   ("PHE", "CD2", "C_ARO"),   ("PHE", "CE1", "C_ARO"),
    ("PHE", "CE2", "C_ARO"),   ("PHE", "CZ", "C_ARO"),
    ("PRO", "CB", "C_ARO"),    ("PRO", "CG", "C_ARO"),    ("PRO", "CD", "C_ARO"),
    ("SER", "OG", "O"),
    ("THR", "OG1", "O"),       ("THR", "CG2", "C_ALI"),
    ("TRP", "CG", "C_ARO"),    ("TRP", "CD1", "C_ARO"),   ("TRP", "CD2", "C_ARO"),   ("TRP", "NE1", "N"),
    ("TRP", "CE2", "C_ARO"),   ("TRP", "CE3", "C_ARO"),   ("TRP", "CZ2", "C_ARO"),   ("TRP", "CZ3", "C_ARO"),
    ("TRP", "CH2", "C_ARO"),
    ("TYR", "CG", "C_ARO"),    ("TYR", "CD1", "C_ARO"),   ("TYR", "CD2", "C_ARO"),   ("TYR", "CE1", "C_ARO"),
    ("TYR", "CE2", "C_ARO"),   ("TYR", "CZ", "C_ARO"),    ("TYR", "OH", "O"),
    ("VAL", "CG1", "C_ALI"),   ("VAL", "CG2", "C_ALI"),
    ("ASX", "CG", "C_CAR"),    ("ASX", "XD1", "U_POL"),   ("ASX", "XD2", "U_POL"),   ("ASX", "AD1", "U_POL"),
    ("ASX", "AD2", "U_POL"),
    ("GLX", "CG", "C_ALI"),    ("GLX", "CD", "C_CAR"),    ("GLX", "XE1", "U_POL"),   ("GLX", "XE2", "U_POL"),
    ("GLX", "AE1", "U_POL"),   ("GLX", "AE2", "U_POL"),
    // Selenocysteine and pyrrolysine
    ("SEC", "SE", "SE"),
    ("CSE", "SE", "SE"),
    ("PYL", "CG", "C_ALI"),    ("PYL", "CD", "C_ALI"),    ("PYL", "CE", "C_ALI"),    ("PYL", "NZ", "N"),
    ("PYL", "O2", "O"),        ("PYL", "C2", "C_CAR"),    ("PYL", "CA2", "C_ARO"),   ("PYL", "CB2", "C_ALI"),
    ("PYL", "CG2", "C_ARO"),   ("PYL", "CD2", "C_ARO"),   ("PYL", "CE2", "C_ARO"),   ("PYL", "N2", "N"),
    // Capping groups and water
    ("ACE", "CH3", "C_ALI"),
    ("NH2", "NH2", "N"),
    ("HOH", "O", "WATER"),
];
