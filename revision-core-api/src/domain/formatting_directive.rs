use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// A parsed formatting rule of the form `"<type>:<argument>"`.
///
/// Parsing never fails: anything that is not understood becomes
/// [`FormattingDirective::Passthrough`], which leaves the value untouched.
///
/// ```
/// use revision_core_api::FormattingDirective;
///
/// let directive = FormattingDirective::parse("boolean:Yes|No");
/// assert_eq!(directive.apply("1"), "Yes");
/// assert_eq!(directive.apply("0"), "No");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattingDirective {
    /// `boolean:<truthy>|<falsy>`
    Boolean { truthy: String, falsy: String },
    /// `string:<template>`, first `%s` is replaced by the value
    Template(String),
    /// `isEmpty:<empty>|<not empty>`
    IsEmpty { empty: String, not_empty: String },
    /// `datetime:<strftime format>`
    DateTime(String),
    /// `options:<value>.<label>|<value>.<label>`
    Options(Vec<(String, String)>),
    Passthrough,
}

impl FormattingDirective {
    pub fn parse(directive: &str) -> Self {
        let Some((kind, argument)) = directive.split_once(':') else {
            return FormattingDirective::Passthrough;
        };

        match kind.trim() {
            "boolean" => match argument.split_once('|') {
                Some((truthy, falsy)) => FormattingDirective::Boolean {
                    truthy: truthy.to_string(),
                    falsy: falsy.to_string(),
                },
                None => FormattingDirective::Passthrough,
            },
            "string" => FormattingDirective::Template(argument.to_string()),
            "isEmpty" => match argument.split_once('|') {
                Some((empty, not_empty)) => FormattingDirective::IsEmpty {
                    empty: empty.to_string(),
                    not_empty: not_empty.to_string(),
                },
                None => FormattingDirective::Passthrough,
            },
            "datetime" => FormattingDirective::DateTime(argument.to_string()),
            "options" => {
                let options: Vec<(String, String)> = argument
                    .split('|')
                    .filter_map(|pair| pair.split_once('.'))
                    .map(|(value, label)| (value.to_string(), label.to_string()))
                    .collect();
                if options.is_empty() {
                    FormattingDirective::Passthrough
                } else {
                    FormattingDirective::Options(options)
                }
            }
            _ => FormattingDirective::Passthrough,
        }
    }

    /// Renders `value` according to this directive
    pub fn apply(&self, value: &str) -> String {
        match self {
            FormattingDirective::Boolean { truthy, falsy } => {
                if is_truthy(value) {
                    truthy.clone()
                } else {
                    falsy.clone()
                }
            }
            FormattingDirective::Template(template) => template.replacen("%s", value, 1),
            FormattingDirective::IsEmpty { empty, not_empty } => {
                if value.is_empty() {
                    empty.clone()
                } else {
                    not_empty.clone()
                }
            }
            FormattingDirective::DateTime(format) => {
                format_datetime(value, format).unwrap_or_else(|| value.to_string())
            }
            FormattingDirective::Options(options) => options
                .iter()
                .find(|(option, _)| option == value)
                .map(|(_, label)| label.clone())
                .unwrap_or_else(|| value.to_string()),
            FormattingDirective::Passthrough => value.to_string(),
        }
    }
}

impl From<&str> for FormattingDirective {
    fn from(directive: &str) -> Self {
        FormattingDirective::parse(directive)
    }
}

/// Empty, `0` and `false` are falsy, everything else is truthy
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

fn format_datetime(value: &str, format: &str) -> Option<String> {
    let mut out = String::new();
    let written = if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        write!(out, "{}", dt.format(format))
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        write!(out, "{}", dt.format(format))
    } else if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        write!(out, "{}", date.format(format))
    } else {
        return None;
    };
    written.ok().map(|_| out)
}
