//! Placeholder substitution engine.
//!
//! Prompts use `{name}` placeholders, where `name` is one or more word
//! characters (`[A-Za-z0-9_]+`). Substitution is partial by default: a
//! placeholder with no supplied value passes through unchanged, so a template
//! can be filled in progressively across several call sites. Strict mode
//! instead fails on the first unresolved placeholder.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use promptfile::template::substitute;
//!
//! let mut values = HashMap::new();
//! values.insert("name".to_string(), "Alice".to_string());
//!
//! let out = substitute("Hi {name}, about {topic}", &values, false).unwrap();
//! assert_eq!(out, "Hi Alice, about {topic}");
//! ```

use crate::error::{PromptError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("invalid placeholder regex"));

/// Substitute `{name}` placeholders in `template` with values from `values`.
///
/// The scan is a single left-to-right pass: substituted values are spliced in
/// as literal text and never re-scanned, so a value containing braces cannot
/// introduce new placeholders.
///
/// In non-strict mode a placeholder absent from `values` is left in the
/// output verbatim, braces included. In strict mode the first such
/// placeholder fails with [`PromptError::MissingPlaceholder`] naming it.
pub fn substitute(
    template: &str,
    values: &HashMap<String, String>,
    strict: bool,
) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last_end = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let whole = caps.get(0).expect("capture group 0 always present");
        let name = &caps[1];

        out.push_str(&template[last_end..whole.start()]);
        match values.get(name) {
            Some(value) => out.push_str(value),
            None if strict => {
                return Err(PromptError::MissingPlaceholder(name.to_string()));
            }
            None => out.push_str(whole.as_str()),
        }
        last_end = whole.end();
    }

    out.push_str(&template[last_end..]);
    Ok(out)
}
