//! Canonical text rendering of a prompt document.
//!
//! Rendering is deterministic and order-sensitive: known attributes in their
//! declared order, then extras in the order supplied, then the role blocks
//! as system, assistant, user. Round-trip tests compare parsed values, so
//! the block ordering here is fixed regardless of the source ordering.

use super::Prompt;
use crate::attributes::KNOWN_FIELDS;
use crate::error::{PromptError, Result};
use serde_json::Value;

impl Prompt {
    /// Render the canonical text form.
    ///
    /// Unset attributes and `None` blocks are skipped entirely; a block set
    /// to the empty string still emits its tag pair. The output parses back
    /// into an equal [`Prompt`].
    pub fn to_text(&self) -> Result<String> {
        let mut out = String::new();

        out.push_str("---\n");
        for name in KNOWN_FIELDS {
            let Some(value) = self.attributes.get(name) else {
                continue;
            };
            if name == "tools" {
                out.push_str("tools: ");
                out.push_str(&render_tools(&value)?);
                out.push('\n');
            } else {
                out.push_str(name);
                out.push_str(": ");
                out.push_str(&scalar_text(&value));
                out.push('\n');
            }
        }
        for (key, value) in &self.attributes.extra {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&scalar_text(value));
            out.push('\n');
        }
        out.push_str("---\n\n");

        if let Some(system) = &self.system {
            push_block(&mut out, "system", system);
            out.push('\n');
        }
        if let Some(assistant) = &self.assistant {
            push_block(&mut out, "assistant", assistant);
            out.push('\n');
        }
        if let Some(user) = &self.user {
            push_block(&mut out, "user", user);
        }

        Ok(out)
    }
}

fn push_block(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str(">\n");
    out.push_str(content.trim());
    out.push_str("\n</");
    out.push_str(tag);
    out.push_str(">\n");
}

/// Pretty-printed JSON for the tools value, with continuation lines indented
/// two spaces so the whole value stays parseable as a YAML flow scalar.
/// serde_json leaves non-ASCII characters unescaped.
fn render_tools(value: &Value) -> Result<String> {
    let pretty = serde_json::to_string_pretty(value)
        .map_err(|e| PromptError::MalformedValue(format!("failed to serialize tools: {e}")))?;
    Ok(pretty.replace('\n', "\n  "))
}

/// Natural text form of a metadata value: strings bare, everything else in
/// its JSON representation.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
