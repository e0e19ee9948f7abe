use std::collections::HashMap;

use super::formatting_directive::FormattingDirective;

/// Stateless formatter for revision values.
///
/// Formatting rules are keyed by field name. A field without a rule is
/// returned verbatim, and so is a field whose rule cannot be understood.
pub struct FieldFormatter;

impl FieldFormatter {
    pub fn format(key: &str, value: &str, rules: &HashMap<String, String>) -> String {
        match rules.get(key) {
            Some(rule) => FormattingDirective::parse(rule).apply(value),
            None => value.to_string(),
        }
    }

    /// Same as [`FieldFormatter::format`] with a missing value treated as empty
    pub fn format_optional(
        key: &str,
        value: Option<&str>,
        rules: &HashMap<String, String>,
    ) -> String {
        Self::format(key, value.unwrap_or_default(), rules)
    }
}
