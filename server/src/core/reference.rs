//! Load reference normalization
//!
//! Pure canonicalization of user-supplied reference numbers into the key
//! used for table lookup, so `REF09460`, `ref09460`, `09460`, and `9460`
//! all land on the same record.

/// Normalize a raw reference number into its lookup key.
///
/// Trims surrounding whitespace, uppercases, removes one leading `REF`
/// prefix, then strips leading zeros. An empty result (e.g. from `REF000`)
/// is not a usable key; callers must reject it as invalid input rather than
/// report a missing load.
pub fn normalize_reference(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let without_prefix = upper.strip_prefix("REF").unwrap_or(&upper);
    without_prefix.trim_start_matches('0').to_string()
}
