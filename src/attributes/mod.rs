//! Attribute record for model-invocation configuration.
//!
//! A [`PromptAttributes`] holds the well-known sampling and routing fields
//! (`temperature`, `model`, `max_tokens`, ...) as typed optionals, and
//! preserves any other frontmatter key in an insertion-ordered `extra` map.
//! Unknown keys round-trip unchanged, so provider-specific settings pass
//! through without this crate having to know about them.
//!
//! Every known field is tri-state in practice: unset (`None`) versus set to a
//! value. The `*_forced` accessors are the enforcement point for callers that
//! are about to hit a provider which mandates a field; they fail with
//! [`PromptError::MissingRequiredAttribute`] instead of silently defaulting.

use crate::error::{PromptError, Result};
use crate::template::substitute;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;


/// Names of the explicitly typed fields, in declaration order.
///
/// Serialization emits these first (in this order), then the `extra` fields
/// in the order they were supplied.
pub const KNOWN_FIELDS: [&str; 8] = [
    "temperature",
    "top_p",
    "top_k",
    "provider",
    "endpoint",
    "model",
    "max_tokens",
    "tools",
];

/// Configuration attributes attached to a prompt document.
///
/// All known fields are optional. Anything else found in the frontmatter is
/// preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptAttributes {
    /// Sampling temperature (e.g. 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Nucleus sampling parameter (e.g. 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    /// Top-k sampling parameter (e.g. 50).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Provider name (e.g. "openai").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Provider endpoint (e.g. "chat").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Model name (e.g. "gpt-4").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Maximum number of tokens to generate (e.g. 4096).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Tool/function definitions offered to the model, one JSON object per
    /// tool. Stored structurally; [`PromptAttributes::format_tools`] handles
    /// placeholder substitution over the serialized form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Map<String, Value>>>,

    /// Any fields not explicitly defined above, in the order supplied.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PromptAttributes {
    /// Look up a field by name, known fields first, then extras.
    ///
    /// Returns `None` when the field is unset or the name is unknown; never
    /// fails. Chain `.unwrap_or(...)` for a default.
    pub fn get(&self, name: &str) -> Option<Value> {
        match name {
            "temperature" => self.temperature.map(Value::from),
            "top_p" => self.top_p.map(Value::from),
            "top_k" => self.top_k.map(Value::from),
            "provider" => self.provider.clone().map(Value::String),
            "endpoint" => self.endpoint.clone().map(Value::String),
            "model" => self.model.clone().map(Value::String),
            "max_tokens" => self.max_tokens.map(Value::from),
            "tools" => self
                .tools
                .as_ref()
                .map(|t| Value::Array(t.iter().cloned().map(Value::Object).collect())),
            _ => self.extra.get(name).cloned(),
        }
    }

    /// Dictionary-style access by name.
    ///
    /// A known field succeeds even when unset (yielding [`Value::Null`]); a
    /// name that is neither known nor an extra field fails with
    /// [`PromptError::UnknownAttribute`], signalling a typo or missing
    /// configuration.
    pub fn field(&self, name: &str) -> Result<Value> {
        if KNOWN_FIELDS.contains(&name) {
            return Ok(self.get(name).unwrap_or(Value::Null));
        }
        self.extra
            .get(name)
            .cloned()
            .ok_or_else(|| PromptError::UnknownAttribute(name.to_string()))
    }

    /// `temperature`, failing if unset.
    pub fn temperature_forced(&self) -> Result<f64> {
        self.temperature.ok_or_else(|| missing("temperature"))
    }

    /// `top_p`, failing if unset.
    pub fn top_p_forced(&self) -> Result<f64> {
        self.top_p.ok_or_else(|| missing("top_p"))
    }

    /// `top_k`, failing if unset.
    pub fn top_k_forced(&self) -> Result<u32> {
        self.top_k.ok_or_else(|| missing("top_k"))
    }

    /// `provider`, failing if unset.
    pub fn provider_forced(&self) -> Result<&str> {
        self.provider.as_deref().ok_or_else(|| missing("provider"))
    }

    /// `endpoint`, failing if unset.
    pub fn endpoint_forced(&self) -> Result<&str> {
        self.endpoint.as_deref().ok_or_else(|| missing("endpoint"))
    }

    /// `model`, failing if unset.
    pub fn model_forced(&self) -> Result<&str> {
        self.model.as_deref().ok_or_else(|| missing("model"))
    }

    /// `max_tokens`, failing if unset.
    pub fn max_tokens_forced(&self) -> Result<u32> {
        self.max_tokens.ok_or_else(|| missing("max_tokens"))
    }

    /// `tools`, failing if unset.
    pub fn tools_forced(&self) -> Result<&[Map<String, Value>]> {
        self.tools.as_deref().ok_or_else(|| missing("tools"))
    }

    /// Serialize `tools` to JSON text and substitute `{name}` placeholders.
    ///
    /// The text form is single-line JSON with a space after each comma and
    /// colon (`[{"name": "get_weather"}]`), the spacing existing tool
    /// templates are written against.
    ///
    /// With `persist` the substituted text is parsed back and stored, so
    /// repeated partial substitutions compose: each call can fill in
    /// placeholders left over from a previous one. Without `persist` the
    /// stored value is untouched.
    ///
    /// Fails with [`PromptError::MissingRequiredAttribute`] when `tools` is
    /// unset, and with [`PromptError::MalformedValue`] when a persisted
    /// substitution no longer parses as JSON (e.g. a value broke the
    /// quoting).
    pub fn format_tools(
        &mut self,
        values: &HashMap<String, String>,
        strict: bool,
        persist: bool,
    ) -> Result<String> {
        let tools = self.tools.as_ref().ok_or_else(|| missing("tools"))?;

        let text = tools_json_text(tools)?;
        let formatted = substitute(&text, values, strict)?;

        if persist {
            self.tools = Some(serde_json::from_str(&formatted).map_err(|e| {
                PromptError::MalformedValue(format!(
                    "substituted tools is not a valid tool list: {e}"
                ))
            })?);
        }

        Ok(formatted)
    }
}

fn missing(name: &str) -> PromptError {
    PromptError::MissingRequiredAttribute(name.to_string())
}

/// Single-line JSON for the tool list, with `", "` and `": "` separators.
fn tools_json_text(tools: &[Map<String, Value>]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    tools
        .serialize(&mut ser)
        .map_err(|e| PromptError::MalformedValue(format!("failed to serialize tools: {e}")))?;
    String::from_utf8(buf)
        .map_err(|e| PromptError::MalformedValue(format!("serialized tools is not UTF-8: {e}")))
}

/// Compact JSON formatting, except with a space after each comma and colon.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> std::io::Result<()>
    where
        W: ?Sized + std::io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> std::io::Result<()>
    where
        W: ?Sized + std::io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: ?Sized + std::io::Write,
    {
        writer.write_all(b": ")
    }
}
