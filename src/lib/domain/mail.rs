//! Mail boundary
//!
//! The delivery method never composes mail itself. Whatever library builds
//! the message exposes it through the [`Mail`] trait and the translators
//! read from it.

use lettre::message::Mailbox;
use serde_json::Value;

#[cfg(test)]
use mockall::mock;

/// A file attached to a mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// The attachment's file name
    pub filename: String,

    /// The MIME type of the attachment, e.g. `application/pdf`
    pub content_type: String,

    /// The decoded attachment bytes
    pub content: Vec<u8>,

    /// Whether the attachment is referenced inline from the HTML body
    pub inline: bool,

    /// The content id an inline attachment is referenced by
    pub content_id: Option<String>,
}

impl Attachment {
    /// Creates a regular (non-inline) attachment
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            content: content.into(),
            inline: false,
            content_id: None,
        }
    }

    /// Marks the attachment as inline, referenced by `content_id`
    pub fn inline(mut self, content_id: impl Into<String>) -> Self {
        self.inline = true;
        self.content_id = Some(content_id.into());
        self
    }
}

/// A fully composed mail, read-only to the delivery method
pub trait Mail {
    /// The sender mailbox, if any
    fn sender(&self) -> Option<Mailbox>;

    /// `To` recipients
    fn to(&self) -> Vec<Mailbox>;

    /// `Cc` recipients
    fn cc(&self) -> Vec<Mailbox>;

    /// `Bcc` recipients
    fn bcc(&self) -> Vec<Mailbox>;

    /// The `Reply-To` mailbox, if any
    fn reply_to(&self) -> Option<Mailbox>;

    /// The subject line
    fn subject(&self) -> Option<String>;

    /// The decoded plain text body
    fn text_body(&self) -> Option<String>;

    /// The decoded HTML body
    fn html_body(&self) -> Option<String>;

    /// Regular and inline attachments
    fn attachments(&self) -> Vec<Attachment>;

    /// Additional headers that should travel with the message.
    ///
    /// Mandrill takes headers as a map: when a name repeats, the first value
    /// is kept. A `Reply-To` header is replaced by [`Mail::reply_to`] when
    /// that returns a mailbox.
    fn headers(&self) -> Vec<(String, String)>;

    /// A named delivery option attached by the composer, such as
    /// `template`, `tags` or `merge_vars`.
    ///
    /// # Returns
    /// [`None`] when the mail does not carry the option.
    fn option(&self, name: &str) -> Option<Value>;
}

#[cfg(test)]
mock! {
    pub Mail {}

    impl Mail for Mail {
        fn sender(&self) -> Option<Mailbox>;
        fn to(&self) -> Vec<Mailbox>;
        fn cc(&self) -> Vec<Mailbox>;
        fn bcc(&self) -> Vec<Mailbox>;
        fn reply_to(&self) -> Option<Mailbox>;
        fn subject(&self) -> Option<String>;
        fn text_body(&self) -> Option<String>;
        fn html_body(&self) -> Option<String>;
        fn attachments(&self) -> Vec<Attachment>;
        fn headers(&self) -> Vec<(String, String)>;
        fn option(&self, name: &str) -> Option<Value>;
    }
}
