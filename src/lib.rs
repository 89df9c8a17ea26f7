//! promptfile: parser and renderer for frontmatter-delimited prompt documents.
//!
//! A prompt document packages model-invocation settings and up to three
//! role-tagged text blocks in a single human-editable file:
//!
//! ```text
//! ---
//! temperature: 0.5
//! provider: openai
//! model: gpt-4
//! ---
//!
//! <system>
//! You are a helpful assistant.
//! </system>
//!
//! <user>
//! Summarize {topic} in one paragraph.
//! </user>
//! ```
//!
//! [`Prompt::parse`] turns the text form into a [`Prompt`], which owns one
//! [`PromptAttributes`] record plus optional `system`/`user`/`assistant`
//! blocks. Blocks and the serialized `tools` payload support `{name}`
//! placeholder substitution via [`template::substitute`], and
//! [`Prompt::to_text`] renders the canonical text form back out.

pub mod attributes;
pub mod error;
pub mod prompt;
pub mod template;

pub use attributes::PromptAttributes;
pub use error::{PromptError, Result};
pub use prompt::Prompt;
pub use template::substitute;
