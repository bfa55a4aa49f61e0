//! Shape identifier helpers
//!
//! Smithy shape IDs have the form `namespace#LocalName`.

/// Local part of a shape ID
///
/// e.g., "com.amazonaws.dynamodb#GetItem" -> "GetItem".
/// An ID without a `#` is returned unchanged.
pub fn local_name(shape_id: &str) -> &str {
    match shape_id.rfind('#') {
        Some(hash_pos) => &shape_id[hash_pos + 1..],
        None => shape_id,
    }
}

/// Namespace part of a shape ID, if it has one
pub fn namespace_of(shape_id: &str) -> Option<&str> {
    shape_id.rfind('#').map(|hash_pos| &shape_id[..hash_pos])
}
