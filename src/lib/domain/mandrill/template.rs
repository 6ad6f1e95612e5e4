//! Template translator

use serde::{Deserialize, Serialize};

use crate::domain::mail::Mail;

use super::{errors::MandrillError, options};

/// An editable region of a stored template and the content replacing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContent {
    /// The `mc:edit` region name
    pub name: String,

    /// The content injected into the region
    pub content: String,
}

impl TemplateContent {
    /// Creates a content block
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// How a mail is submitted to Mandrill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    /// `messages/send` with the rendered message
    Message,

    /// `messages/send-template`, rendered by Mandrill from a stored template
    Template {
        /// The stored template's name
        name: String,

        /// Content blocks, possibly empty
        content: Vec<TemplateContent>,
    },
}

/// The template a mail asks to be rendered with, if any.
///
/// The `template` option names the template; `template_content` optionally
/// carries a list of `{ "name": ..., "content": ... }` blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    name: Option<String>,
    content: Vec<TemplateContent>,
}

impl Template {
    /// Extracts the template name and content blocks from `mail`.
    ///
    /// A missing or empty name means the mail is not a template send. Missing
    /// content is an empty list.
    pub fn new(mail: &impl Mail) -> Result<Self, MandrillError> {
        let name = options::string(mail, "template")?;
        let content: Vec<TemplateContent> =
            options::typed(mail, "template_content")?.unwrap_or_default();

        Ok(Self { name, content })
    }

    /// The template name, [`None`] when the mail is not a template send
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The template content blocks
    pub fn content(&self) -> &[TemplateContent] {
        &self.content
    }

    /// Decides how the mail has to be submitted
    pub fn mode(self) -> DeliveryMode {
        match self.name {
            Some(name) => DeliveryMode::Template {
                name,
                content: self.content,
            },
            None => DeliveryMode::Message,
        }
    }
}
