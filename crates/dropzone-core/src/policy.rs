//! File type policy.
//!
//! Decides whether a declared MIME type is on the allow-list. Matching
//! is exact and case-sensitive: `image/*` wildcards and subtype
//! fallbacks are deliberately not supported.

/// Whether `declared_type` appears verbatim in `allow_list`.
#[must_use]
pub fn is_accepted(declared_type: &str, allow_list: &[String]) -> bool {
    allow_list.iter().any(|allowed| allowed == declared_type)
}
