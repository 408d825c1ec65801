//! Identifier transformations for catalog names.

/// Convert a catalog identifier to a camel-style field name.
///
/// This is a heuristic, not a general case converter:
///
/// - two-character identifiers (`ID`, `Id`) are lower-cased entirely
/// - identifiers without any lowercase letter (`NAME`, `USER_ID`) are
///   lower-cased entirely. This departs from the plain first-character rule,
///   which would keep the remainder and give `nAME`; generated field names
///   for all-caps columns are `name`, not `nAME`.
/// - everything else only has its first character lower-cased
///   (`CreatedAt` -> `createdAt`, `postID` -> `postID`)
pub fn to_camel_case(s: &str) -> String {
    if s.chars().count() == 2 || is_upper_identifier(s) {
        return s.to_lowercase();
    }

    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

fn is_upper_identifier(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

/// Single-character alias used to qualify columns of `table` in queries.
///
/// Returns an empty string for an empty table name.
pub fn table_alias(table: &str) -> String {
    table
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}
