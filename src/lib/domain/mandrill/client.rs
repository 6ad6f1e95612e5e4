//! Mandrill API client boundary
//!
//! The HTTP transport lives outside this crate. Anything able to call
//! Mandrill's `messages/send` and `messages/send-template` endpoints plugs in
//! through these traits.

use serde_json::Value;

#[cfg(test)]
use mockall::mock;

use super::{errors::MandrillError, template::TemplateContent};

/// The messages endpoints of the Mandrill API
pub trait MessagesApi {
    /// Sends a fully rendered message.
    ///
    /// # Arguments
    /// * `message` - The serialized message JSON.
    /// * `async_send` - Asks Mandrill to process the send in the background.
    ///
    /// # Returns
    /// Mandrill's response, untouched.
    fn send(&self, message: &str, async_send: bool) -> Result<Value, MandrillError>;

    /// Sends a message rendered from a stored template.
    ///
    /// # Arguments
    /// * `template_name` - The name of the stored template.
    /// * `template_content` - Content blocks overriding the template's editable regions.
    /// * `message` - The serialized message JSON.
    /// * `async_send` - Asks Mandrill to process the send in the background.
    ///
    /// # Returns
    /// Mandrill's response, untouched.
    fn send_template(
        &self,
        template_name: &str,
        template_content: &[TemplateContent],
        message: &str,
        async_send: bool,
    ) -> Result<Value, MandrillError>;
}

/// Creates [`MessagesApi`] clients for an API key
pub trait ApiConnector {
    /// The client type handed out
    type Api: MessagesApi;

    /// Creates a client authenticated with `api_key`.
    ///
    /// # Returns
    /// A [`MandrillError::InvalidKey`] (or any other error) when no client can
    /// be created for the key.
    fn connect(&self, api_key: &str) -> Result<Self::Api, MandrillError>;
}

#[cfg(test)]
mock! {
    pub MessagesApi {}

    impl MessagesApi for MessagesApi {
        fn send(&self, message: &str, async_send: bool) -> Result<Value, MandrillError>;
        fn send_template(
            &self,
            template_name: &str,
            template_content: &[TemplateContent],
            message: &str,
            async_send: bool,
        ) -> Result<Value, MandrillError>;
    }
}

#[cfg(test)]
mock! {
    pub ApiConnector {}

    impl ApiConnector for ApiConnector {
        type Api = MockMessagesApi;

        fn connect(&self, api_key: &str) -> Result<MockMessagesApi, MandrillError>;
    }
}
