//! Prompt document model.
//!
//! A [`Prompt`] combines one [`PromptAttributes`] record with up to three
//! optional role blocks (system, user, assistant). Parsing from the text
//! form lives in `parser`, canonical rendering in `render`.
//!
//! # Document format
//!
//! ```text
//! ---
//! temperature: 0.5
//! provider: openai
//! model: gpt-4
//! ---
//!
//! <system>
//! Hi from system
//! </system>
//!
//! <user>
//! Hi from user {custom}
//! </user>
//! ```
//!
//! A block that is `None` means "not specified" and is omitted from
//! serialization entirely; a block holding the empty string is distinct and
//! still renders as an empty tag pair.

use crate::attributes::PromptAttributes;
use crate::error::{PromptError, Result};
use crate::template::substitute;
use std::collections::HashMap;

mod parser;
mod render;

/// A parsed prompt document: attributes plus optional role blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prompt {
    /// Model-invocation configuration from the frontmatter.
    pub attributes: PromptAttributes,
    /// The `<system>` block, if present.
    pub system: Option<String>,
    /// The `<user>` block, if present.
    pub user: Option<String>,
    /// The `<assistant>` block, if present.
    pub assistant: Option<String>,
}

impl Prompt {
    /// Substitute placeholders in the system block.
    ///
    /// Fails with [`PromptError::MissingRequiredAttribute`] when the block is
    /// not set. With `persist` the result is stored back into the block, so
    /// a template can be filled in progressively across several call sites.
    pub fn format_system(
        &mut self,
        values: &HashMap<String, String>,
        strict: bool,
        persist: bool,
    ) -> Result<String> {
        format_block(&mut self.system, "system", values, strict, persist)
    }

    /// Substitute placeholders in the user block. See [`Prompt::format_system`].
    pub fn format_user(
        &mut self,
        values: &HashMap<String, String>,
        strict: bool,
        persist: bool,
    ) -> Result<String> {
        format_block(&mut self.user, "user", values, strict, persist)
    }

    /// Substitute placeholders in the assistant block. See [`Prompt::format_system`].
    pub fn format_assistant(
        &mut self,
        values: &HashMap<String, String>,
        strict: bool,
        persist: bool,
    ) -> Result<String> {
        format_block(&mut self.assistant, "assistant", values, strict, persist)
    }

    /// The system block, failing if unset.
    pub fn system_forced(&self) -> Result<&str> {
        self.system.as_deref().ok_or_else(|| missing_block("system"))
    }

    /// The user block, failing if unset.
    pub fn user_forced(&self) -> Result<&str> {
        self.user.as_deref().ok_or_else(|| missing_block("user"))
    }

    /// The assistant block, failing if unset.
    pub fn assistant_forced(&self) -> Result<&str> {
        self.assistant.as_deref().ok_or_else(|| missing_block("assistant"))
    }
}

fn format_block(
    block: &mut Option<String>,
    name: &str,
    values: &HashMap<String, String>,
    strict: bool,
    persist: bool,
) -> Result<String> {
    let text = block.as_deref().ok_or_else(|| missing_block(name))?;
    let formatted = substitute(text, values, strict)?;
    if persist {
        *block = Some(formatted.clone());
    }
    Ok(formatted)
}

fn missing_block(name: &str) -> PromptError {
    PromptError::MissingRequiredAttribute(name.to_string())
}
