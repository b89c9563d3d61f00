use crate::core::utils::names::normalize_residue_name;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of residue kinds recognized by the residue-identity classifier.
///
/// The discriminant of each variant is its class index, so the order of the
/// variants is part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResidueKind {
    // --- Standard amino acids ---
    Alanine,        // ALA
    Arginine,       // ARG
    Asparagine,     // ASN
    AsparticAcid,   // ASP
    Cysteine,       // CYS
    Glutamine,      // GLN
    GlutamicAcid,   // GLU
    Glycine,        // GLY
    Histidine,      // HIS
    Isoleucine,     // ILE
    Leucine,        // LEU
    Lysine,         // LYS
    Methionine,     // MET
    Phenylalanine,  // PHE
    Proline,        // PRO
    Serine,         // SER
    Threonine,      // THR
    Tryptophan,     // TRP
    Tyrosine,       // TYR
    Valine,         // VAL

    // --- Non-standard amino acids ---
    SelenocysteineLegacy, // CSE, found in some early files
    Selenocysteine,       // SEC
    Pyrrolysine,          // PYL
    PyrrolysineLegacy,    // PYH, found in some early files
    AsxAmbiguous,         // ASX, ASN or ASP
    GlxAmbiguous,         // GLX, GLN or GLU

    Unknown, // UNK

    // --- Capping groups ---
    Acetyl, // ACE
    Amine,  // NH2

    // --- DNA ---
    DeoxyAdenosine, // DA
    DeoxyCytidine,  // DC
    DeoxyGuanosine, // DG
    DeoxyThymidine, // DT
    DeoxyUridine,   // DU
    DeoxyInosine,   // DI

    // --- RNA ---
    Adenosine, // A
    Cytidine,  // C
    Guanosine, // G
    Uridine,   // U
    Inosine,   // I
    Thymidine, // T

    Nucleotide, // N, generic nucleotide

    Water, // HOH
}

impl ResidueKind {
    pub const ALL: [ResidueKind; 43] = [
        ResidueKind::Alanine,
        ResidueKind::Arginine,
        ResidueKind::Asparagine,
        ResidueKind::AsparticAcid,
        ResidueKind::Cysteine,
        ResidueKind::Glutamine,
        ResidueKind::GlutamicAcid,
        ResidueKind::Glycine,
        ResidueKind::Histidine,
        ResidueKind::Isoleucine,
        ResidueKind::Leucine,
        ResidueKind::Lysine,
        ResidueKind::Methionine,
        ResidueKind::Phenylalanine,
        ResidueKind::Proline,
        ResidueKind::Serine,
        ResidueKind::Threonine,
        ResidueKind::Tryptophan,
        ResidueKind::Tyrosine,
        ResidueKind::Valine,
        ResidueKind::SelenocysteineLegacy,
        ResidueKind::Selenocysteine,
        ResidueKind::Pyrrolysine,
        ResidueKind::PyrrolysineLegacy,
        ResidueKind::AsxAmbiguous,
        ResidueKind::GlxAmbiguous,
        ResidueKind::Unknown,
        ResidueKind::Acetyl,
        ResidueKind::Amine,
        ResidueKind::DeoxyAdenosine,
        ResidueKind::DeoxyCytidine,
        ResidueKind::DeoxyGuanosine,
        ResidueKind::DeoxyThymidine,
        ResidueKind::DeoxyUridine,
        ResidueKind::DeoxyInosine,
        ResidueKind::Adenosine,
        ResidueKind::Cytidine,
        ResidueKind::Guanosine,
        ResidueKind::Uridine,
        ResidueKind::Inosine,
        ResidueKind::Thymidine,
        ResidueKind::Nucleotide,
        ResidueKind::Water,
    ];

    /// The residue name as it appears in structure files.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResidueKind::Alanine => "ALA",
            ResidueKind::Arginine => "ARG",
            ResidueKind::Asparagine => "ASN",
            ResidueKind::AsparticAcid => "ASP",
            ResidueKind::Cysteine => "CYS",
            ResidueKind::Glutamine => "GLN",
            ResidueKind::GlutamicAcid => "GLU",
            ResidueKind::Glycine => "GLY",
            ResidueKind::Histidine => "HIS",
            ResidueKind::Isoleucine => "ILE",
            ResidueKind::Leucine => "LEU",
            ResidueKind::Lysine => "LYS",
            ResidueKind::Methionine => "MET",
            ResidueKind::Phenylalanine => "PHE",
            ResidueKind::Proline => "PRO",
            ResidueKind::Serine => "SER",
            ResidueKind::Threonine => "THR",
            ResidueKind::Tryptophan => "TRP",
            ResidueKind::Tyrosine => "TYR",
            ResidueKind::Valine => "VAL",
            ResidueKind::SelenocysteineLegacy => "CSE",
            ResidueKind::Selenocysteine => "SEC",
            ResidueKind::Pyrrolysine => "PYL",
            ResidueKind::PyrrolysineLegacy => "PYH",
            ResidueKind::AsxAmbiguous => "ASX",
            ResidueKind::GlxAmbiguous => "GLX",
            ResidueKind::Unknown => "UNK",
            ResidueKind::Acetyl => "ACE",
            ResidueKind::Amine => "NH2",
            ResidueKind::DeoxyAdenosine => "DA",
            ResidueKind::DeoxyCytidine => "DC",
            ResidueKind::DeoxyGuanosine => "DG",
            ResidueKind::DeoxyThymidine => "DT",
            ResidueKind::DeoxyUridine => "DU",
            ResidueKind::DeoxyInosine => "DI",
            ResidueKind::Adenosine => "A",
            ResidueKind::Cytidine => "C",
            ResidueKind::Guanosine => "G",
            ResidueKind::Uridine => "U",
            ResidueKind::Inosine => "I",
            ResidueKind::Thymidine => "T",
            ResidueKind::Nucleotide => "N",
            ResidueKind::Water => "HOH",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Maps a free-text residue name onto a kind, falling back to
    /// [`ResidueKind::Unknown`] for anything outside the enumeration.
    pub fn from_residue_name(name: &str) -> Self {
        name.parse().unwrap_or(ResidueKind::Unknown)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized residue name: '{0}'")]
pub struct ParseResidueKindError(pub String);

impl FromStr for ResidueKind {
    type Err = ParseResidueKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_residue_name(s);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| ParseResidueKindError(s.to_string()))
    }
}

impl fmt::Display for ResidueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
