//! Message translator

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use lettre::message::Mailbox;
use serde::Serialize;
use serde_json::Value;

use crate::domain::mail::{Attachment, Mail};

use super::{errors::MandrillError, options};

/// The kind of recipient field an address came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    /// `To`
    To,

    /// `Cc`
    Cc,

    /// `Bcc`
    Bcc,
}

/// A single recipient of a Mandrill message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    /// The recipient's address
    pub email: String,

    /// The display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Which header the recipient is listed in
    #[serde(rename = "type")]
    pub kind: RecipientType,
}

impl Recipient {
    fn new(mailbox: Mailbox, kind: RecipientType) -> Self {
        Self {
            email: mailbox.email.to_string(),
            name: mailbox.name,
            kind,
        }
    }
}

/// An attached or embedded file, base64 encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedFile {
    /// The MIME type
    #[serde(rename = "type")]
    pub content_type: String,

    /// The file name, or the content id for embedded images
    pub name: String,

    /// Base64 encoded content
    pub content: String,
}

impl From<Attachment> for EncodedFile {
    fn from(attachment: Attachment) -> Self {
        let name = match attachment.content_id {
            Some(cid) if attachment.inline => cid,
            _ => attachment.filename,
        };

        Self {
            content_type: attachment.content_type,
            name,
            content: STANDARD.encode(attachment.content),
        }
    }
}

/// A mail projected onto Mandrill's message structure.
///
/// Built fresh for every delivery and never modified once serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_name: Option<String>,
    to: Vec<Recipient>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    important: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    track_clicks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_css: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url_strip_qs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preserve_recipients: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view_content_link: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bcc_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tracking_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signing_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    return_path_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merge_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    global_merge_vars: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merge_vars: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipient_metadata: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<EncodedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<EncodedFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_at: Option<String>,
}

impl Message {
    /// Projects `mail` onto a Mandrill message.
    ///
    /// # Returns
    /// [`MandrillError::InvalidOption`] when a delivery option has the wrong shape.
    pub fn new(mail: &impl Mail) -> Result<Self, MandrillError> {
        let sender = mail.sender();

        let to = mail
            .to()
            .into_iter()
            .map(|m| Recipient::new(m, RecipientType::To))
            .chain(mail.cc().into_iter().map(|m| Recipient::new(m, RecipientType::Cc)))
            .chain(mail.bcc().into_iter().map(|m| Recipient::new(m, RecipientType::Bcc)))
            .collect();

        let mut headers = BTreeMap::new();
        for (name, value) in mail.headers() {
            headers.entry(name).or_insert(value);
        }
        if let Some(reply_to) = mail.reply_to() {
            headers.retain(|name: &String, _| !name.eq_ignore_ascii_case("Reply-To"));
            headers.insert("Reply-To".to_string(), reply_to.to_string());
        }

        let (images, attachments): (Vec<_>, Vec<_>) =
            mail.attachments().into_iter().partition(|a| a.inline);

        Ok(Self {
            html: mail.html_body(),
            text: mail.text_body(),
            subject: mail.subject(),
            from_email: sender.as_ref().map(|m| m.email.to_string()),
            from_name: sender.and_then(|m| m.name),
            to,
            headers,
            important: options::boolean(mail, "important")?,
            track_opens: options::boolean(mail, "track_opens")?,
            track_clicks: options::boolean(mail, "track_clicks")?,
            auto_text: options::boolean(mail, "auto_text")?,
            auto_html: options::boolean(mail, "auto_html")?,
            inline_css: options::boolean(mail, "inline_css")?,
            url_strip_qs: options::boolean(mail, "url_strip_qs")?,
            preserve_recipients: options::boolean(mail, "preserve_recipients")?,
            view_content_link: options::boolean(mail, "view_content_link")?,
            bcc_address: options::string(mail, "bcc_address")?,
            tracking_domain: options::string(mail, "tracking_domain")?,
            signing_domain: options::string(mail, "signing_domain")?,
            return_path_domain: options::string(mail, "return_path_domain")?,
            merge: options::boolean(mail, "merge")?,
            merge_language: options::string(mail, "merge_language")?,
            global_merge_vars: options::raw(mail, "global_merge_vars"),
            merge_vars: options::raw(mail, "merge_vars"),
            tags: options::tags(mail, "tags")?,
            subaccount: options::string(mail, "subaccount")?,
            metadata: options::raw(mail, "metadata"),
            recipient_metadata: options::raw(mail, "recipient_metadata"),
            attachments: attachments.into_iter().map(EncodedFile::from).collect(),
            images: images.into_iter().map(EncodedFile::from).collect(),
            send_at: options::send_at(mail, "send_at")?,
        })
    }

    /// Uses `subaccount` unless the mail already named one
    pub fn with_default_subaccount(mut self, subaccount: Option<&str>) -> Self {
        if self.subaccount.is_none() {
            self.subaccount = subaccount.map(str::to_string);
        }
        self
    }

    /// The recipients, in `To`, `Cc`, `Bcc` order
    pub fn recipients(&self) -> &[Recipient] {
        &self.to
    }

    /// The subaccount the message is sent from
    pub fn subaccount(&self) -> Option<&str> {
        self.subaccount.as_deref()
    }

    /// Serializes the message into the JSON Mandrill expects.
    ///
    /// Field order is fixed and headers are sorted, so identical mail always
    /// produces identical JSON.
    pub fn to_json(&self) -> Result<String, MandrillError> {
        Ok(serde_json::to_string(self)?)
    }
}
