//! Mandrill payloads and the API client boundary

mod client;
mod message;
mod options;
mod template;

pub mod errors;

pub use client::{ApiConnector, MessagesApi};
pub use message::{EncodedFile, Message, Recipient, RecipientType};
pub use template::{DeliveryMode, Template, TemplateContent};

#[cfg(test)]
pub mod tests {
    pub use super::client::{MockApiConnector, MockMessagesApi};
}
