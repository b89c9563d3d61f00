/// Reduces a residue name to its first whitespace-delimited token.
///
/// Returns an empty string when the input holds no token at all.
pub fn normalize_residue_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// Strips surrounding whitespace from an atom name. Inner characters,
/// including primes and digits, are kept as-is.
pub fn normalize_atom_name(name: &str) -> &str {
    name.trim()
}
