//! The delivery method

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info};

use crate::{
    domain::{
        mail::Mail,
        mandrill::{
            errors::MandrillError, ApiConnector, DeliveryMode, Message, MessagesApi, Template,
        },
    },
    infrastructure::config::MandrillConfig,
};

/// Options handed to the delivery method by the mail framework, kept as-is
pub type Settings = HashMap<String, String>;

/// Delivers composed mail through Mandrill.
///
/// Every call to [`DeliveryMethod::deliver`] creates a client for the
/// configured API key, decides between a plain and a template send, and keeps
/// Mandrill's response until the next successful delivery.
#[derive(Debug)]
pub struct DeliveryMethod<C>
where
    C: ApiConnector,
{
    settings: Settings,
    config: MandrillConfig,
    connector: C,
    response: Option<Value>,
}

impl<C> DeliveryMethod<C>
where
    C: ApiConnector,
{
    /// Creates a delivery method.
    ///
    /// # Arguments
    /// * `settings` - Framework options, stored verbatim.
    /// * `config` - The Mandrill configuration read on every delivery.
    /// * `connector` - Creates API clients for the configured key.
    pub fn new(settings: Settings, config: MandrillConfig, connector: C) -> Self {
        Self {
            settings,
            config,
            connector,
            response: None,
        }
    }

    /// Delivers `mail` and records Mandrill's response.
    ///
    /// A mail naming a template is sent with `messages/send-template`,
    /// everything else with `messages/send`. Either way the serialized
    /// message is what gets submitted.
    ///
    /// # Returns
    /// Mandrill's response, which is also available from
    /// [`DeliveryMethod::response`] afterwards. Errors from the connector or
    /// the client are returned unchanged and leave the previous response in
    /// place.
    pub fn deliver(&mut self, mail: &impl Mail) -> Result<Value, MandrillError> {
        let async_send = self.config.async_send();
        let api = self.connector.connect(self.config.api_key())?;

        let message = Message::new(mail)?.with_default_subaccount(self.config.subaccount());
        let mode = Template::new(mail)?.mode();
        let json = message.to_json()?;

        let template = match &mode {
            DeliveryMode::Template { name, .. } => Some(name.as_str()),
            DeliveryMode::Message => None,
        };

        debug!(
            template,
            recipients = message.recipients().len(),
            async_send,
            "delivering mail via Mandrill"
        );

        let response = match &mode {
            DeliveryMode::Template { name, content } => {
                api.send_template(name, content, &json, async_send)?
            }
            DeliveryMode::Message => api.send(&json, async_send)?,
        };

        info!(template, "Mandrill accepted the mail");

        self.response = Some(response.clone());

        Ok(response)
    }

    /// Mandrill's response to the last successful delivery
    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    /// The settings this delivery method was created with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The Mandrill configuration
    pub fn config(&self) -> &MandrillConfig {
        &self.config
    }
}
