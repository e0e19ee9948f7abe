//! Naming helpers for foreign-key shaped field keys.
//!
//! A key is foreign-key shaped when it ends with the configured suffix and
//! has something in front of it (`author_id` yes, `_id` no).

/// Returns true if `key` references another entity by id
pub fn is_foreign_key(key: &str, suffix: &str) -> bool {
    !suffix.is_empty() && key.len() > suffix.len() && key.ends_with(suffix)
}

/// Strips one trailing `suffix` from a foreign-key shaped key.
///
/// Returns `None` when the key is not foreign-key shaped.
pub fn relation_name<'a>(key: &'a str, suffix: &str) -> Option<&'a str> {
    if is_foreign_key(key, suffix) {
        key.strip_suffix(suffix)
    } else {
        None
    }
}

/// Lower camel case of a snake case name: `published_status` -> `publishedStatus`.
///
/// Leading underscores are dropped, repeated underscores collapse.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' || c == '-' || c == ' ' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Candidate relation accessor names for a foreign-key shaped key, in lookup order.
///
/// The stripped name comes first, the camel case form second. The second
/// entry is omitted when it equals the first.
pub fn relation_candidates(key: &str, suffix: &str) -> Vec<String> {
    let Some(stripped) = relation_name(key, suffix) else {
        return Vec::new();
    };
    let mut candidates = vec![stripped.to_string()];
    let camel = camel_case(stripped);
    if camel != stripped {
        candidates.push(camel);
    }
    candidates
}
